use crate::handlers::{
    health::health_check,
    players::{assign_profile, create_player, delete_player, get_player, get_players},
    profiles::{create_profile, delete_profile, get_profile, get_profiles},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Profile routes
        .route("/profiles", get(get_profiles).post(create_profile))
        .route(
            "/profiles/:profile_id",
            get(get_profile).delete(delete_profile),
        )
        // Player routes, cascading to the owned profile
        .route("/players", get(get_players).post(create_player))
        .route(
            "/players/:player_id",
            get(get_player).delete(delete_player),
        )
        .route("/players/:player_id/profile", put(assign_profile))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
