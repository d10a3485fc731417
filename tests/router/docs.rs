//! Route-level tests for the API documentation.

use axum::http::StatusCode;
use tower::ServiceExt;

use super::*;

/// Expect the OpenAPI document to list the favorite routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get_request("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/users/favorites"));
    assert!(paths.contains_key("/favorites/vehicles/{id}"));
    assert!(paths.contains_key("/characters/{id}"));

    Ok(())
}
