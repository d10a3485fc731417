//! Tests for the users, characters, planets, and vehicles list endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    model::catalog::{CharacterDto, PlanetDto, VehicleDto},
    server::controller::catalog::{get_characters, get_planets, get_users, get_vehicles},
};

use super::*;

/// Tests that users are listed without their password.
///
/// Expected: Ok with 200 OK response containing two users, none carrying `password`
#[tokio::test]
async fn lists_users_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .build()
        .await?;

    let result = get_users(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<serde_json::Value> = body_json(resp).await;
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|user| user.get("password").is_none()));
    assert_eq!(users[1]["username"], "user2");

    Ok(())
}

/// Tests listing characters.
///
/// Expected: Ok with 200 OK response containing characters in insertion order
#[tokio::test]
async fn lists_characters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_character(1, 1)
        .with_mock_character(2, 1)
        .build()
        .await?;

    let result = get_characters(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let characters: Vec<CharacterDto> = body_json(resp).await;
    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Tests listing planets when none exist.
///
/// Expected: Ok with 200 OK response containing an empty array
#[tokio::test]
async fn lists_no_planets_when_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planets(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let planets: Vec<PlanetDto> = body_json(resp).await;
    assert!(planets.is_empty());

    Ok(())
}

/// Tests listing vehicles.
///
/// Expected: Ok with 200 OK response containing the vehicle's max speed
#[tokio::test]
async fn lists_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_vehicle(1)
        .build()
        .await?;

    let result = get_vehicles(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let vehicles: Vec<VehicleDto> = body_json(resp).await;
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].max_speed, Some(30));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
