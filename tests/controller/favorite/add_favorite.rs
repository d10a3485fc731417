//! Tests for the add favorite endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteRequestDto,
    },
    server::{
        controller::favorite::{add_favorite_character, add_favorite_planet, add_favorite_vehicle},
        data::favorite::FavoriteRepository,
    },
};

use super::*;

/// Tests adding a planet to a user's favorites.
///
/// Expected: Ok with 200 OK response and a favorite row pointing only at the planet
#[tokio::test]
async fn adds_planet_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet(1)
        .with_mock_user(1)
        .build()
        .await?;

    let result = add_favorite_planet(
        State(test.into_app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.msg, "Planet has been added to favorites");

    let favorites = FavoriteRepository::new(&test.db).get_all().await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].user_id, 1);
    assert_eq!(favorites[0].favorite_planets, Some(1));
    assert_eq!(favorites[0].favorite_characters, None);
    assert_eq!(favorites[0].favorite_vehicles, None);

    Ok(())
}

/// Tests adding a character to a user's favorites.
///
/// Expected: Ok with 200 OK response and "Character has been added to favorites"
#[tokio::test]
async fn adds_character_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character(1, 1)
        .with_mock_user(1)
        .build()
        .await?;

    let result = add_favorite_character(
        State(test.into_app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.msg, "Character has been added to favorites");
    assert_eq!(test.favorite_count().await?, 1);

    Ok(())
}

/// Tests 404 response when the vehicle being favorited does not exist.
///
/// Expected: Err with 404 NOT_FOUND response and no favorite stored
#[tokio::test]
async fn not_found_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = add_favorite_vehicle(
        State(test.into_app_state()),
        Path(7),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Vehicle not found");
    assert_eq!(test.favorite_count().await?, 0);

    Ok(())
}

/// Tests 404 response when the user does not exist.
///
/// Expected: Err with 404 NOT_FOUND response and "User not found"
#[tokio::test]
async fn not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet(1)
        .build()
        .await?;

    let result = add_favorite_planet(
        State(test.into_app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 42 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}
