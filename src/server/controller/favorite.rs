//! Endpoints for listing, adding, and removing favorites.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteDto, FavoriteRequestDto},
    },
    server::{
        error::Error,
        model::{app::AppState, catalog::FavoriteTarget},
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// List every favorite
///
/// Favorites are listed for all users, only the favorite ID and owning user ID are returned.
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when listing favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_all_favorites().await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorites/planets/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Planet added to favorites", body = MessageDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Json(body): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, FavoriteTarget::planet(planet_id), body.user_id).await
}

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/favorites/characters/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Character added to favorites", body = MessageDto),
        (status = 404, description = "Character or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
    Json(body): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, FavoriteTarget::character(character_id), body.user_id).await
}

/// Add a vehicle to a user's favorites
#[utoipa::path(
    post,
    path = "/favorites/vehicles/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Vehicle added to favorites", body = MessageDto),
        (status = 404, description = "Vehicle or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    Json(body): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, FavoriteTarget::vehicle(vehicle_id), body.user_id).await
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/planets/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 404, description = "Planet, user, or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Json(body): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, FavoriteTarget::planet(planet_id), body.user_id).await
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/characters/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Character removed from favorites", body = MessageDto),
        (status = 404, description = "Character, user, or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
    Json(body): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, FavoriteTarget::character(character_id), body.user_id).await
}

/// Remove a vehicle from a user's favorites
///
/// Unlike planets and characters, the vehicle and user are not looked up first: any
/// missing reference is reported as a missing favorite.
#[utoipa::path(
    delete,
    path = "/favorites/vehicles/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Vehicle removed from favorites", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    Json(body): Json<FavoriteRequestDto>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, FavoriteTarget::vehicle(vehicle_id), body.user_id).await
}

async fn add_favorite(
    state: &AppState,
    target: FavoriteTarget,
    user_id: i32,
) -> Result<(StatusCode, Json<MessageDto>), Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.add_favorite(target, user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: format!("{} has been added to favorites", target.kind),
        }),
    ))
}

async fn remove_favorite(
    state: &AppState,
    target: FavoriteTarget,
    user_id: i32,
) -> Result<(StatusCode, Json<MessageDto>), Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.remove_favorite(target, user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: format!("{} has been removed from favorites", target.kind),
        }),
    ))
}
