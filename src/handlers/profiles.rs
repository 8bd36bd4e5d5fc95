use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::Profile;
use tracing::{debug, error, info, instrument, trace, warn};

/// Get all profiles
#[utoipa::path(
    get,
    path = "/profiles",
    tag = "profiles",
    responses(
        (status = 200, description = "Profiles retrieved successfully", body = Vec<Profile>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_profiles(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, ApiError> {
    trace!("Entering get_profiles function");

    match state.roster.all_profiles().await {
        Ok(profiles) => {
            info!("Successfully retrieved {} profiles", profiles.len());
            Ok(Json(profiles))
        }
        Err(e) => {
            error!("Failed to retrieve profiles: {}", e);
            Err(e.into())
        }
    }
}

/// Get a specific profile by ID
#[utoipa::path(
    get,
    path = "/profiles/{profile_id}",
    tag = "profiles",
    params(
        ("profile_id" = i32, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, description = "Profile retrieved successfully", body = Profile),
        (status = 404, description = "Profile not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_profile(
    Path(profile_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Profile>, ApiError> {
    debug!("Fetching profile with ID: {}", profile_id);

    match state.roster.get_profile(profile_id).await {
        Ok(profile) => Ok(Json(profile)),
        Err(e) => {
            warn!("Failed to retrieve profile {}: {}", profile_id, e);
            Err(e.into())
        }
    }
}

/// Create a new profile
///
/// Any `id` in the body is ignored, the store assigns one.
#[utoipa::path(
    post,
    path = "/profiles",
    tag = "profiles",
    request_body = Profile,
    responses(
        (status = 201, description = "Profile created successfully", body = Profile),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<Profile>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    trace!("Entering create_profile function");

    match state.roster.add_profile(request.twitter_handle).await {
        Ok(profile) => {
            info!("Profile created successfully with ID: {:?}", profile.id);
            Ok((StatusCode::CREATED, Json(profile)))
        }
        Err(e) => {
            error!("Failed to create profile: {}", e);
            Err(e.into())
        }
    }
}

/// Delete a profile
///
/// The owning player, if any, is not consulted. The database rejects deleting
/// a profile that is still owned, reported as 409.
#[utoipa::path(
    delete,
    path = "/profiles/{profile_id}",
    tag = "profiles",
    params(
        ("profile_id" = i32, Path, description = "Profile ID"),
    ),
    responses(
        (status = 204, description = "Profile deleted successfully"),
        (status = 404, description = "Profile not found", body = crate::schemas::ErrorResponse),
        (status = 409, description = "Profile is still owned by a player", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_profile(
    Path(profile_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    debug!("Attempting to delete profile with ID: {}", profile_id);

    match state.roster.delete_profile(profile_id).await {
        Ok(()) => {
            info!("Profile with ID {} deleted successfully", profile_id);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            warn!("Failed to delete profile {}: {}", profile_id, e);
            Err(e.into())
        }
    }
}
