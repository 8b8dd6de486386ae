use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, Page},
        solar_system::{CreateSolarSystemDto, SolarSystemDto, UpdateSolarSystemDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        data::solar_system::SolarSystemSortField,
        error::Error,
        model::{
            app::AppState,
            page::{PageQuery, PageRequest},
        },
        service::solar_system::SolarSystemService,
    },
};

/// OpenAPI tag of the solar system endpoints
pub static SOLAR_SYSTEM_TAG: &str = "solar-system";

/// Create a solar system in a save
#[utoipa::path(
    post,
    path = "/api/1/saves/{save_id}/solar-systems",
    tag = SOLAR_SYSTEM_TAG,
    params(("save_id" = Uuid, Path, description = "ID of the owning save")),
    request_body = CreateSolarSystemDto,
    responses(
        (status = 200, description = "Solar system created", body = SolarSystemDto),
        (status = 400, description = "Invalid JSON or field value", body = ErrorDto),
        (status = 404, description = "Save not found", body = ErrorDto),
        (status = 409, description = "The save already has a solar system with this name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_solar_system(
    State(state): State<AppState>,
    ApiPath(save_id): ApiPath<Uuid>,
    ApiJson(dto): ApiJson<CreateSolarSystemDto>,
) -> Result<impl IntoResponse, Error> {
    let solar_system = SolarSystemService::new(&state.db)
        .create_solar_system(save_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(solar_system)))
}

/// Search the solar systems of a save
///
/// Sort fields: `id`, `created_at`, `name`, `notes` and `save.<field>` for any save sort field.
#[utoipa::path(
    get,
    path = "/api/1/saves/{save_id}/solar-systems",
    tag = SOLAR_SYSTEM_TAG,
    params(
        ("save_id" = Uuid, Path, description = "ID of the owning save"),
        ("name" = Option<String>, Query, description = "Case-insensitive prefix of any word of the name"),
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1"),
        ("size" = Option<u64>, Query, description = "Page size, defaults to 100, at most 500"),
        ("sort" = Option<Vec<String>>, Query, description = "`field[:asc|desc]`, may be repeated"),
    ),
    responses(
        (status = 200, description = "One page of solar systems", body = Page<SolarSystemDto>),
        (status = 400, description = "Invalid paging or sort parameter", body = ErrorDto),
        (status = 404, description = "Save not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_solar_systems(
    State(state): State<AppState>,
    ApiPath(save_id): ApiPath<Uuid>,
    query: PageQuery,
) -> Result<impl IntoResponse, Error> {
    let page = PageRequest::<SolarSystemSortField>::parse(&query)?;
    let solar_systems = SolarSystemService::new(&state.db)
        .search_solar_systems(save_id, query.name, page)
        .await?;

    Ok((StatusCode::OK, Json(solar_systems)))
}

/// Get a solar system by ID
#[utoipa::path(
    get,
    path = "/api/1/solar-systems/{id}",
    tag = SOLAR_SYSTEM_TAG,
    params(("id" = Uuid, Path, description = "Solar system ID")),
    responses(
        (status = 200, description = "The solar system", body = SolarSystemDto),
        (status = 404, description = "Solar system not found or malformed ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_solar_system(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let solar_system = SolarSystemService::new(&state.db)
        .get_solar_system(id)
        .await?;

    Ok((StatusCode::OK, Json(solar_system)))
}

/// Update a solar system
#[utoipa::path(
    patch,
    path = "/api/1/solar-systems/{id}",
    tag = SOLAR_SYSTEM_TAG,
    params(("id" = Uuid, Path, description = "Solar system ID")),
    request_body = UpdateSolarSystemDto,
    responses(
        (status = 200, description = "Solar system updated", body = SolarSystemDto),
        (status = 400, description = "Invalid JSON or field value", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 409, description = "Name taken or solar system changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_solar_system(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(dto): ApiJson<UpdateSolarSystemDto>,
) -> Result<impl IntoResponse, Error> {
    let solar_system = SolarSystemService::new(&state.db)
        .update_solar_system(id, dto)
        .await?;

    Ok((StatusCode::OK, Json(solar_system)))
}

/// Delete a solar system without a star
#[utoipa::path(
    delete,
    path = "/api/1/solar-systems/{id}",
    tag = SOLAR_SYSTEM_TAG,
    params(("id" = Uuid, Path, description = "Solar system ID")),
    responses(
        (status = 204, description = "Solar system deleted"),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 409, description = "The solar system still has a star", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_solar_system(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, Error> {
    SolarSystemService::new(&state.db)
        .delete_solar_system(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
