use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Profile;

/// A player, the owning side of the one-to-one link to [`Profile`].
/// Saving or deleting a player cascades to its profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    /// Store assigned identity, `null` for a player that was never saved
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    /// The owned profile, if any
    #[serde(alias = "playerProfile", default)]
    pub profile: Option<Profile>,
}

impl Player {
    pub fn new(name: impl Into<String>, profile: Option<Profile>) -> Self {
        Self {
            id: None,
            name: name.into(),
            profile,
        }
    }

    /// The identity this player carries, if it has one.
    pub fn identity(&self) -> Option<i32> {
        crate::normalize_id(self.id)
    }

    /// Identity of the owned profile, if the profile has been saved.
    pub fn profile_id(&self) -> Option<i32> {
        self.profile.as_ref().and_then(Profile::identity)
    }
}
