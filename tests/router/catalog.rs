//! Route-level tests for catalog endpoints.

use axum::http::StatusCode;
use holocron::model::catalog::{PlanetDto, UserDto};
use tower::ServiceExt;

use super::*;

/// Expect `GET /user` to list users
#[tokio::test]
async fn get_user_route_lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let resp = app(&test).oneshot(get_request("/user")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<UserDto> = body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "user1@example.com");

    Ok(())
}

/// Expect `GET /planets/{id}` to return the planet
#[tokio::test]
async fn get_planet_route_returns_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet(3)
        .build()
        .await?;

    let resp = app(&test).oneshot(get_request("/planets/3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let planet: PlanetDto = body_json(resp).await;
    assert_eq!(planet.id, 3);

    Ok(())
}

/// Expect 404 with an error body for `GET /characters/999`
#[tokio::test]
async fn get_character_route_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/characters/999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Character not found" }));

    Ok(())
}

/// Expect a non-integer path ID to be rejected before reaching the handler
#[tokio::test]
async fn rejects_non_integer_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/vehicles/speeder"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
