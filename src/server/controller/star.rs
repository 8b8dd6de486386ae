use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        star::{CreateStarDto, StarDto, UpdateStarDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::Error,
        model::app::AppState,
        service::star::StarService,
    },
};

/// OpenAPI tag of the star endpoints
pub static STAR_TAG: &str = "star";

/// Create the star of a solar system
#[utoipa::path(
    post,
    path = "/api/1/solar-systems/{solar_system_id}/star",
    tag = STAR_TAG,
    params(("solar_system_id" = Uuid, Path, description = "ID of the owning solar system")),
    request_body = CreateStarDto,
    responses(
        (status = 200, description = "Star created", body = StarDto),
        (status = 400, description = "Invalid JSON or field value", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 409, description = "The solar system already has a star", body = ErrorDto),
        (status = 422, description = "Unknown spectral class", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_star(
    State(state): State<AppState>,
    ApiPath(solar_system_id): ApiPath<Uuid>,
    ApiJson(dto): ApiJson<CreateStarDto>,
) -> Result<impl IntoResponse, Error> {
    let star = StarService::new(&state.db)
        .create_star(solar_system_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(star)))
}

/// Get the star of a solar system
#[utoipa::path(
    get,
    path = "/api/1/solar-systems/{solar_system_id}/star",
    tag = STAR_TAG,
    params(("solar_system_id" = Uuid, Path, description = "ID of the owning solar system")),
    responses(
        (status = 200, description = "The star", body = StarDto),
        (status = 404, description = "The solar system has no star", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_star_of_solar_system(
    State(state): State<AppState>,
    ApiPath(solar_system_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let star = StarService::new(&state.db)
        .get_star_of_solar_system(solar_system_id)
        .await?;

    Ok((StatusCode::OK, Json(star)))
}

/// Get a star by ID
#[utoipa::path(
    get,
    path = "/api/1/stars/{id}",
    tag = STAR_TAG,
    params(("id" = Uuid, Path, description = "Star ID")),
    responses(
        (status = 200, description = "The star", body = StarDto),
        (status = 404, description = "Star not found or malformed ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_star(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let star = StarService::new(&state.db).get_star(id).await?;

    Ok((StatusCode::OK, Json(star)))
}

/// Update a star
#[utoipa::path(
    patch,
    path = "/api/1/stars/{id}",
    tag = STAR_TAG,
    params(("id" = Uuid, Path, description = "Star ID")),
    request_body = UpdateStarDto,
    responses(
        (status = 200, description = "Star updated", body = StarDto),
        (status = 400, description = "Invalid JSON or field value", body = ErrorDto),
        (status = 404, description = "Star not found", body = ErrorDto),
        (status = 409, description = "Star changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_star(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(dto): ApiJson<UpdateStarDto>,
) -> Result<impl IntoResponse, Error> {
    let star = StarService::new(&state.db).update_star(id, dto).await?;

    Ok((StatusCode::OK, Json(star)))
}

/// Delete a star
#[utoipa::path(
    delete,
    path = "/api/1/stars/{id}",
    tag = STAR_TAG,
    params(("id" = Uuid, Path, description = "Star ID")),
    responses(
        (status = 204, description = "Star deleted"),
        (status = 404, description = "Star not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_star(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, Error> {
    StarService::new(&state.db).delete_star(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
