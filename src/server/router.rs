//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs` as the browsable map of the API.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /user` - List users
/// - `GET /characters`, `GET /characters/{id}` - List or fetch characters
/// - `GET /planets`, `GET /planets/{id}` - List or fetch planets
/// - `GET /vehicles`, `GET /vehicles/{id}` - List or fetch vehicles
/// - `GET /users/favorites` - List every favorite
/// - `POST`/`DELETE /favorites/{planets,characters,vehicles}/{id}` - Add or remove a favorite
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`. All origins are
/// allowed by CORS and every request is traced.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron catalog API"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Reference data API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorites API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::catalog::get_users))
        .routes(routes!(controller::catalog::get_characters))
        .routes(routes!(controller::catalog::get_character))
        .routes(routes!(controller::catalog::get_planets))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(controller::catalog::get_vehicles))
        .routes(routes!(controller::catalog::get_vehicle))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_vehicle,
            controller::favorite::remove_favorite_vehicle
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
