use anyhow::Result;
use sea_orm::Database;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Default database, created on first start
pub const DEFAULT_DATABASE_URL: &str = "sqlite://playerhub.db?mode=rwc";

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Connect to the database and build the application state
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;
    debug!("Database connection established");

    Ok(AppState::new(db))
}
