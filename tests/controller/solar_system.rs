use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::SpectralClass;
use stellar_tracker::{
    model::solar_system::{CreateSolarSystemDto, UpdateSolarSystemDto},
    server::{
        controller::{
            solar_system::{
                create_solar_system, delete_solar_system, get_solar_system,
                search_solar_systems, update_solar_system,
            },
            util::extract::{ApiJson, ApiPath},
        },
        model::{app::AppState, page::PageQuery},
    },
};
use tracker_test_utils::prelude::*;
use uuid::Uuid;

fn create_dto(name: &str) -> CreateSolarSystemDto {
    CreateSolarSystemDto {
        name: name.to_string(),
        notes: Some("binary".to_string()),
    }
}

#[tokio::test]
async fn create_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_save("Alpha").build().await?;

    let result = create_solar_system(
        State(test.to_app_state::<AppState>()),
        ApiPath(test.saves[0].id),
        ApiJson(create_dto("Sol")),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the save doesn't exist
async fn create_rejects_unknown_save() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = create_solar_system(
        State(test.to_app_state::<AppState>()),
        ApiPath(Uuid::new_v4()),
        ApiJson(create_dto("Sol")),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 409 for a name used twice in one save
async fn create_rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .build()
        .await?;

    let result = create_solar_system(
        State(test.to_app_state::<AppState>()),
        ApiPath(test.saves[0].id),
        ApiJson(create_dto("Sol")),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn search_filters_by_name_and_sorts_by_save_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Alpha Centauri")
        .with_solar_system("Alpha", "Sirius")
        .build()
        .await?;

    let query = PageQuery {
        name: Some("cen".to_string()),
        sorts: vec!["save.name".to_string(), "name:desc".to_string()],
        ..Default::default()
    };
    let result = search_solar_systems(
        State(test.to_app_state::<AppState>()),
        ApiPath(test.saves[0].id),
        query,
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a non-numeric page
async fn search_rejects_invalid_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_save("Alpha").build().await?;

    let query = PageQuery {
        page: Some("first".to_string()),
        ..Default::default()
    };
    let result = search_solar_systems(
        State(test.to_app_state::<AppState>()),
        ApiPath(test.saves[0].id),
        query,
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn get_and_update_return_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .build()
        .await?;
    let state = test.to_app_state::<AppState>();
    let id = test.solar_systems[0].id;

    let result = get_solar_system(State(state.clone()), ApiPath(id)).await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let dto = UpdateSolarSystemDto {
        notes: Some(None),
        ..Default::default()
    };
    let result = update_solar_system(State(state), ApiPath(id), ApiJson(dto)).await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 409 while the solar system has a star
async fn delete_rejects_solar_system_with_star() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .with_star("Alpha", "Sol", SpectralClass::ClassM)
        .build()
        .await?;

    let result = delete_solar_system(
        State(test.to_app_state::<AppState>()),
        ApiPath(test.solar_systems[0].id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}
