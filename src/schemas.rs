use common::{Player, Profile};
use roster::RelationshipManager;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Player/profile stores and the relationship logic on top of them
    pub roster: RelationshipManager,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let roster = RelationshipManager::from_connection(db.clone());
        Self { db, roster }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::profiles::get_profiles,
        crate::handlers::profiles::get_profile,
        crate::handlers::profiles::create_profile,
        crate::handlers::profiles::delete_profile,
        crate::handlers::players::get_players,
        crate::handlers::players::get_player,
        crate::handlers::players::create_player,
        crate::handlers::players::assign_profile,
        crate::handlers::players::delete_player,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            Player,
            Profile,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "profiles", description = "Player profile endpoints"),
        (name = "players", description = "Player endpoints, cascading to the owned profile"),
    ),
    info(
        title = "PlayerHub API",
        description = "Players and their one-to-one profiles",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
