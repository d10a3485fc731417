//! Tests for the get_favorites endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{model::favorite::FavoriteDto, server::controller::favorite::get_favorites};

use super::*;

/// Tests that favorites of every user are listed with only their ID and owner.
///
/// Expected: Ok with 200 OK response containing both users' favorites
#[tokio::test]
async fn lists_favorites_of_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet(1)
        .with_mock_vehicle(1)
        .with_mock_user(1)
        .with_mock_user(2)
        .build()
        .await?;
    let first = test.catalog().insert_favorite_planet(1, 1).await?;
    let second = test.catalog().insert_favorite_vehicle(2, 1).await?;

    let result = get_favorites(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<FavoriteDto> = body_json(resp).await;
    assert_eq!(
        favorites,
        vec![
            FavoriteDto {
                id: first.id,
                user_id: 1
            },
            FavoriteDto {
                id: second.id,
                user_id: 2
            },
        ]
    );

    Ok(())
}

/// Tests that each favorite is serialized with exactly the `id` and `user_id` keys.
///
/// Expected: Ok with 200 OK response and no target columns in the body
#[tokio::test]
async fn omits_target_columns() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character(1, 1)
        .with_mock_user(1)
        .build()
        .await?;
    test.catalog().insert_favorite_character(1, 1).await?;

    let resp = get_favorites(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let favorites: Vec<serde_json::Value> = body_json(resp).await;
    let keys: Vec<&String> = favorites[0].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 2);
    assert!(favorites[0].get("favorite_characters").is_none());

    Ok(())
}
