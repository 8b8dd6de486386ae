use std::time::Duration;

use axum::Router;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run pending migrations
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool connected, schema up to date
/// - `Err(Error::DbErr)` - Connection failed or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations are up to date");

    Ok(db)
}

/// Build the application router with CORS and request tracing
pub fn build_router(config: &Config, state: AppState) -> Router {
    let cors = if config.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    router::routes()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
