use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{Player, Profile};
use tracing::{debug, error, info, instrument, trace, warn};

/// Get all players
#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    responses(
        (status = 200, description = "Players retrieved successfully", body = Vec<Player>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_players(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    trace!("Entering get_players function");

    match state.roster.all_players().await {
        Ok(players) => {
            info!("Successfully retrieved {} players", players.len());
            Ok(Json(players))
        }
        Err(e) => {
            error!("Failed to retrieve players: {}", e);
            Err(e.into())
        }
    }
}

/// Get a specific player by ID, with the owned profile resolved
#[utoipa::path(
    get,
    path = "/players/{player_id}",
    tag = "players",
    params(
        ("player_id" = i32, Path, description = "Player ID"),
    ),
    responses(
        (status = 200, description = "Player retrieved successfully", body = Player),
        (status = 404, description = "Player not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_player(
    Path(player_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Player>, ApiError> {
    debug!("Fetching player with ID: {}", player_id);

    match state.roster.get_player(player_id).await {
        Ok(player) => Ok(Json(player)),
        Err(e) => {
            warn!("Failed to retrieve player {}: {}", player_id, e);
            Err(e.into())
        }
    }
}

/// Create a new player
///
/// An embedded profile is created along with the player.
#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = Player,
    responses(
        (status = 201, description = "Player created successfully", body = Player),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<Player>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    debug!("Creating player with name: {}", request.name);

    match state.roster.add_player(request.name, request.profile).await {
        Ok(player) => {
            info!(
                "Player created successfully with ID: {:?}, profile: {:?}",
                player.id,
                player.profile_id()
            );
            Ok((StatusCode::CREATED, Json(player)))
        }
        Err(e) => {
            error!("Failed to create player: {}", e);
            Err(e.into())
        }
    }
}

/// Attach or replace the profile of a player
///
/// The body is either a new profile or a reference (`{"id": ..}`) to an existing one.
/// The previously owned profile is kept in storage.
#[utoipa::path(
    put,
    path = "/players/{player_id}/profile",
    tag = "players",
    params(
        ("player_id" = i32, Path, description = "Player ID"),
    ),
    request_body = Profile,
    responses(
        (status = 200, description = "Profile assigned successfully", body = Player),
        (status = 404, description = "Player or profile not found", body = crate::schemas::ErrorResponse),
        (status = 409, description = "Profile is already owned by another player", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn assign_profile(
    Path(player_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<Profile>,
) -> Result<Json<Player>, ApiError> {
    debug!("Assigning profile {:?} to player {}", request.id, player_id);

    match state.roster.assign_profile(player_id, request).await {
        Ok(player) => {
            info!(
                "Player {} now owns profile {:?}",
                player_id,
                player.profile_id()
            );
            Ok(Json(player))
        }
        Err(e) => {
            warn!("Failed to assign profile to player {}: {}", player_id, e);
            Err(e.into())
        }
    }
}

/// Delete a player and the profile it owns
#[utoipa::path(
    delete,
    path = "/players/{player_id}",
    tag = "players",
    params(
        ("player_id" = i32, Path, description = "Player ID"),
    ),
    responses(
        (status = 204, description = "Player deleted successfully"),
        (status = 404, description = "Player not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_player(
    Path(player_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    debug!("Attempting to delete player with ID: {}", player_id);

    match state.roster.delete_player(player_id).await {
        Ok(()) => {
            info!("Player with ID {} deleted successfully", player_id);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            warn!("Failed to delete player {}: {}", player_id, e);
            Err(e.into())
        }
    }
}
