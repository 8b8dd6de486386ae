use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use stellar_tracker::{
    model::save::{CreateSaveDto, UpdateSaveDto},
    server::{
        controller::{
            save::{create_save, delete_save, get_save, search_saves, update_save},
            util::extract::{ApiJson, ApiPath},
        },
        model::{app::AppState, page::PageQuery},
    },
};
use tracker_test_utils::prelude::*;
use uuid::Uuid;

fn create_dto(name: &str, mining_speed: i32) -> CreateSaveDto {
    CreateSaveDto {
        name: name.to_string(),
        notes: None,
        mining_speed,
    }
}

#[tokio::test]
/// Expect 200 with the created save
async fn create_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = create_save(
        State(test.to_app_state::<AppState>()),
        ApiJson(create_dto("Alpha", 100)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a mining speed below 100
async fn create_rejects_low_mining_speed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = create_save(
        State(test.to_app_state::<AppState>()),
        ApiJson(create_dto("Alpha", 99)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 409 for a name that is already taken
async fn create_rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_save("Alpha").build().await?;

    let result = create_save(
        State(test.to_app_state::<AppState>()),
        ApiJson(create_dto("Alpha", 100)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn get_returns_ok_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_save("Alpha").build().await?;
    let state = test.to_app_state::<AppState>();

    let found = get_save(State(state.clone()), ApiPath(test.saves[0].id)).await;
    assert_eq!(found.into_response().status(), StatusCode::OK);

    let missing = get_save(State(state), ApiPath(Uuid::new_v4())).await;
    assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 for an unknown sort field
async fn search_rejects_unknown_sort_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let state = test.to_app_state::<AppState>();

    let ok = search_saves(State(state.clone()), PageQuery::default()).await;
    assert_eq!(ok.into_response().status(), StatusCode::OK);

    let query = PageQuery {
        sorts: vec!["mass:desc".to_string()],
        ..Default::default()
    };
    let result = search_saves(State(state), query).await;
    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 409 when the client's version is outdated
async fn update_rejects_stale_version() -> Result<(), TestError> {
    let test = TestBuilder::new().with_save("Alpha").build().await?;
    let state = test.to_app_state::<AppState>();
    let save = &test.saves[0];

    let dto = UpdateSaveDto {
        version: Some(save.version),
        mining_speed: Some(400),
        ..Default::default()
    };

    let first = update_save(State(state.clone()), ApiPath(save.id), ApiJson(dto.clone())).await;
    assert_eq!(first.into_response().status(), StatusCode::OK);

    let second = update_save(State(state), ApiPath(save.id), ApiJson(dto)).await;
    assert_eq!(second.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 204 on delete and 404 when deleting again
async fn delete_returns_no_content_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_save("Alpha").build().await?;
    let state = test.to_app_state::<AppState>();
    let id = test.saves[0].id;

    let result = delete_save(State(state.clone()), ApiPath(id)).await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    let result = delete_save(State(state), ApiPath(id)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
