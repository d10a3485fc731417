//! Read-only endpoints for users, characters, planets, and vehicles.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CharacterDto, PlanetDto, UserDto, VehicleDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

/// OpenAPI tag for reference data routes
pub static CATALOG_TAG: &str = "catalog";

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let users = catalog_service.list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let characters = catalog_service.list_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let character = catalog_service.get_character(character_id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let planets = catalog_service.list_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let planet = catalog_service.get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// List all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let vehicles = catalog_service.list_vehicles().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a single vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Success when retrieving vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let vehicle = catalog_service.get_vehicle(vehicle_id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}
