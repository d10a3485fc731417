//! Tests for the remove favorite endpoints.

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
    server::controller::favorite::{
        remove_favorite_character, remove_favorite_planet, remove_favorite_vehicle,
    },
};

use super::*;

/// Tests removing a favorited character.
///
/// Expected: Ok with 200 OK response and the favorite deleted
#[tokio::test]
async fn removes_character_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character(1, 1)
        .with_mock_user(1)
        .build()
        .await?;
    test.catalog().insert_favorite_character(1, 1).await?;

    let result = remove_favorite_character(
        State(test.into_app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.msg, "Character has been removed from favorites");
    assert_eq!(test.favorite_count().await?, 0);

    Ok(())
}

/// Tests that only one of two duplicate planet favorites is removed.
///
/// Expected: Ok with 200 OK response and one favorite remaining
#[tokio::test]
async fn removes_single_duplicate_planet_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet(1)
        .with_mock_user(1)
        .build()
        .await?;
    test.catalog().insert_favorite_planet(1, 1).await?;
    test.catalog().insert_favorite_planet(1, 1).await?;

    let result = remove_favorite_planet(
        State(test.into_app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(test.favorite_count().await?, 1);

    Ok(())
}

/// Tests 404 response when the planet exists but was never favorited by the user.
///
/// Expected: Err with 404 NOT_FOUND response and "Favorite not found"
#[tokio::test]
async fn not_found_when_planet_not_favorited() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet(1)
        .with_mock_user(1)
        .build()
        .await?;

    let result = remove_favorite_planet(
        State(test.into_app_state()),
        Path(1),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Favorite not found");

    Ok(())
}

/// Tests 404 response when the character being unfavorited does not exist.
///
/// Expected: Err with 404 NOT_FOUND response and "Character not found"
#[tokio::test]
async fn not_found_for_nonexistent_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = remove_favorite_character(
        State(test.into_app_state()),
        Path(3),
        Json(FavoriteRequestDto { user_id: 1 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Character not found");

    Ok(())
}

/// Tests that removing a vehicle favorite skips the vehicle and user lookups.
///
/// Neither the vehicle nor the user exist, the response still reports the missing favorite.
///
/// Expected: Err with 404 NOT_FOUND response and "Favorite not found"
#[tokio::test]
async fn vehicle_reports_missing_favorite_without_lookups() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = remove_favorite_vehicle(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteRequestDto { user_id: 2 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Favorite not found");

    Ok(())
}
