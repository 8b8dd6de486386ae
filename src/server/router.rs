//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here together with their OpenAPI specifications,
//! and Swagger UI is configured to serve interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `POST /api/1/saves`, `GET /api/1/saves` - Create and search saves
/// - `GET | PATCH | DELETE /api/1/saves/{id}` - Single save
/// - `POST /api/1/saves/{save_id}/solar-systems`, `GET ...` - Create and search solar systems of a save
/// - `GET | PATCH | DELETE /api/1/solar-systems/{id}` - Single solar system
/// - `POST | GET /api/1/solar-systems/{solar_system_id}/star` - Star of a solar system
/// - `GET | PATCH | DELETE /api/1/stars/{id}` - Single star
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>`; provide the state with `with_state` before serving.
pub fn routes() -> Router<AppState> {
    let (routes, api) = api_router().split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// OpenAPI document of every registered endpoint.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_, api) = api_router().split_for_parts();

    api
}

fn api_router() -> OpenApiRouter<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Stellar Tracker", description = "Progress tracker for game saves, solar systems and stars"),
        tags(
            (name = controller::save::SAVE_TAG, description = "Game saves"),
            (name = controller::solar_system::SOLAR_SYSTEM_TAG, description = "Solar systems of a save"),
            (name = controller::star::STAR_TAG, description = "The star of a solar system"),
        )
    )]
    struct ApiDoc;

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::save::create_save,
            controller::save::search_saves
        ))
        .routes(routes!(
            controller::save::get_save,
            controller::save::update_save,
            controller::save::delete_save
        ))
        .routes(routes!(
            controller::solar_system::create_solar_system,
            controller::solar_system::search_solar_systems
        ))
        .routes(routes!(
            controller::solar_system::get_solar_system,
            controller::solar_system::update_solar_system,
            controller::solar_system::delete_solar_system
        ))
        .routes(routes!(
            controller::star::create_star,
            controller::star::get_star_of_solar_system
        ))
        .routes(routes!(
            controller::star::get_star,
            controller::star::update_star,
            controller::star::delete_star
        ))
}
