use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, Page},
        save::{CreateSaveDto, SaveDto, UpdateSaveDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        data::save::SaveSortField,
        error::Error,
        model::{
            app::AppState,
            page::{PageQuery, PageRequest},
        },
        service::save::SaveService,
    },
};

/// OpenAPI tag of the save endpoints
pub static SAVE_TAG: &str = "save";

/// Create a save
#[utoipa::path(
    post,
    path = "/api/1/saves",
    tag = SAVE_TAG,
    request_body = CreateSaveDto,
    responses(
        (status = 200, description = "Save created", body = SaveDto),
        (status = 400, description = "Invalid JSON or field value", body = ErrorDto),
        (status = 409, description = "A save with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_save(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateSaveDto>,
) -> Result<impl IntoResponse, Error> {
    let save = SaveService::new(&state.db).create_save(dto).await?;

    Ok((StatusCode::OK, Json(save)))
}

/// Search saves
///
/// Sort fields: `id`, `created_at`, `name`, `notes`, `mining_speed`.
#[utoipa::path(
    get,
    path = "/api/1/saves",
    tag = SAVE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1"),
        ("size" = Option<u64>, Query, description = "Page size, defaults to 100, at most 500"),
        ("sort" = Option<Vec<String>>, Query, description = "`field[:asc|desc]`, may be repeated"),
    ),
    responses(
        (status = 200, description = "One page of saves", body = Page<SaveDto>),
        (status = 400, description = "Invalid paging or sort parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_saves(
    State(state): State<AppState>,
    query: PageQuery,
) -> Result<impl IntoResponse, Error> {
    let page = PageRequest::<SaveSortField>::parse(&query)?;
    let saves = SaveService::new(&state.db).search_saves(page).await?;

    Ok((StatusCode::OK, Json(saves)))
}

/// Get a save by ID
#[utoipa::path(
    get,
    path = "/api/1/saves/{id}",
    tag = SAVE_TAG,
    params(("id" = Uuid, Path, description = "Save ID")),
    responses(
        (status = 200, description = "The save", body = SaveDto),
        (status = 404, description = "Save not found or malformed ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_save(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let save = SaveService::new(&state.db).get_save(id).await?;

    Ok((StatusCode::OK, Json(save)))
}

/// Update a save
///
/// Absent fields are left unchanged, `"notes": null` clears the notes.
#[utoipa::path(
    patch,
    path = "/api/1/saves/{id}",
    tag = SAVE_TAG,
    params(("id" = Uuid, Path, description = "Save ID")),
    request_body = UpdateSaveDto,
    responses(
        (status = 200, description = "Save updated", body = SaveDto),
        (status = 400, description = "Invalid JSON or field value", body = ErrorDto),
        (status = 404, description = "Save not found", body = ErrorDto),
        (status = 409, description = "Name taken or save changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_save(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(dto): ApiJson<UpdateSaveDto>,
) -> Result<impl IntoResponse, Error> {
    let save = SaveService::new(&state.db).update_save(id, dto).await?;

    Ok((StatusCode::OK, Json(save)))
}

/// Delete a save and all of its solar systems
#[utoipa::path(
    delete,
    path = "/api/1/saves/{id}",
    tag = SAVE_TAG,
    params(("id" = Uuid, Path, description = "Save ID")),
    responses(
        (status = 204, description = "Save deleted"),
        (status = 404, description = "Save not found", body = ErrorDto),
        (status = 409, description = "A solar system of the save still has a star", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_save(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, Error> {
    SaveService::new(&state.db).delete_save(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
