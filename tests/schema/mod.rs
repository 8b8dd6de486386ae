//! Constraints enforced by the migrated schema itself, bypassing service validation.

use entity::sea_orm_active_enums::SpectralClass;
use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter};
use tracker_test_utils::prelude::*;

#[tokio::test]
/// Expect a negative version to be rejected by every table
async fn rejects_negative_version() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .build()
        .await?;

    let save = entity::save::Model {
        version: -1,
        ..factory::mock_save_model("Beta")
    };
    let result = entity::prelude::Save::insert(save.into_active_model())
        .exec(&test.db)
        .await;
    assert!(result.is_err());

    let solar_system = entity::solar_system::Model {
        version: -1,
        ..factory::mock_solar_system_model(test.saves[0].id, "Vega")
    };
    let result = entity::prelude::SolarSystem::insert(solar_system.into_active_model())
        .exec(&test.db)
        .await;
    assert!(result.is_err());

    let star = entity::star::Model {
        version: -1,
        ..factory::mock_star_model(test.solar_systems[0].id, SpectralClass::ClassG)
    };
    let result = entity::prelude::Star::insert(star.into_active_model())
        .exec(&test.db)
        .await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
/// Expect values outside the fourteen spectral classes to be rejected
async fn rejects_unknown_spectral_class() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .with_star("Alpha", "Sol", SpectralClass::ClassG)
        .build()
        .await?;

    let result = entity::prelude::Star::update_many()
        .col_expr(entity::star::Column::SpectralClass, Expr::value("red_dwarf"))
        .filter(entity::star::Column::Id.eq(test.stars[0].id))
        .exec(&test.db)
        .await;
    assert!(result.is_err());

    let result = entity::prelude::Star::update_many()
        .col_expr(entity::star::Column::SpectralClass, Expr::value("black_hole"))
        .filter(entity::star::Column::Id.eq(test.stars[0].id))
        .exec(&test.db)
        .await?;
    assert_eq!(result.rows_affected, 1);

    Ok(())
}

#[tokio::test]
/// Expect a zero radius to be rejected even for a star at version 0
async fn rejects_non_positive_radius() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_save("Alpha")
        .with_solar_system("Alpha", "Sol")
        .build()
        .await?;

    let star = entity::star::Model {
        radius: 0.0,
        ..factory::mock_star_model(test.solar_systems[0].id, SpectralClass::ClassG)
    };
    let result = entity::prelude::Star::insert(star.into_active_model())
        .exec(&test.db)
        .await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
/// Expect the mining speed check to hold without service validation
async fn enforces_minimum_mining_speed() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_migrations().build().await?;

    let result = test
        .save()
        .insert_mock_save_with_mining_speed("Slow", 99)
        .await;
    assert!(result.is_err());

    let save = test
        .save()
        .insert_mock_save_with_mining_speed("Steady", 100)
        .await?;
    assert_eq!(save.mining_speed, 100);

    Ok(())
}
