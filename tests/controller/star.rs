use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::SpectralClass;
use stellar_tracker::{
    model::star::{CreateStarDto, UpdateStarDto},
    server::{
        controller::{
            star::{create_star, delete_star, get_star, get_star_of_solar_system, update_star},
            util::extract::{ApiJson, ApiPath},
        },
        model::app::AppState,
    },
};
use tracker_test_utils::prelude::*;

fn create_dto(luminosity: f32) -> CreateStarDto {
    CreateStarDto {
        spectral_class: SpectralClass::WhiteDwarf,
        luminosity,
        radius: 0.01,
    }
}

#[tokio::test]
/// Expect 200 for the first star and 409 for a second one
async fn create_allows_one_star_per_solar_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sirius")
        .build()
        .await?;
    let state = test.to_app_state::<AppState>();
    let solar_system_id = test.solar_systems[0].id;

    let first = create_star(
        State(state.clone()),
        ApiPath(solar_system_id),
        ApiJson(create_dto(0.1)),
    )
    .await;
    assert_eq!(first.into_response().status(), StatusCode::OK);

    let second = create_star(
        State(state),
        ApiPath(solar_system_id),
        ApiJson(create_dto(0.1)),
    )
    .await;
    assert_eq!(second.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a luminosity of 0
async fn create_rejects_zero_luminosity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sirius")
        .build()
        .await?;

    let result = create_star(
        State(test.to_app_state::<AppState>()),
        ApiPath(test.solar_systems[0].id),
        ApiJson(create_dto(0.0)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn lookups_return_ok_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .with_solar_system("Alpha", "Empty")
        .with_star("Alpha", "Sol", SpectralClass::ClassG)
        .build()
        .await?;
    let state = test.to_app_state::<AppState>();
    let sol = test.find_solar_system("Alpha", "Sol")?.id;
    let empty = test.find_solar_system("Alpha", "Empty")?.id;

    let result = get_star(State(state.clone()), ApiPath(test.stars[0].id)).await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let result = get_star_of_solar_system(State(state.clone()), ApiPath(sol)).await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let result = get_star_of_solar_system(State(state), ApiPath(empty)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn update_and_delete() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .with_star("Alpha", "Sol", SpectralClass::ClassG)
        .build()
        .await?;
    let state = test.to_app_state::<AppState>();
    let id = test.stars[0].id;

    let dto = UpdateStarDto {
        luminosity: Some(1.5),
        ..Default::default()
    };
    let result = update_star(State(state.clone()), ApiPath(id), ApiJson(dto)).await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let result = delete_star(State(state.clone()), ApiPath(id)).await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    let result = get_star(State(state), ApiPath(id)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
