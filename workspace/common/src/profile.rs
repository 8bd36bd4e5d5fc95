use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A player profile. Owned by at most one [`crate::Player`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    /// Store assigned identity, `null` for a profile that was never saved
    #[serde(default)]
    pub id: Option<i32>,
    /// Twitter handle, e.g. `@Cristiano`
    #[serde(rename = "twitter", alias = "twitterHandle", default)]
    pub twitter_handle: Option<String>,
}

impl Profile {
    /// A profile that has not been persisted yet.
    pub fn new(twitter_handle: impl Into<String>) -> Self {
        Self {
            id: None,
            twitter_handle: Some(twitter_handle.into()),
        }
    }

    /// A bare reference to an already persisted profile.
    pub fn reference(id: i32) -> Self {
        Self {
            id: Some(id),
            twitter_handle: None,
        }
    }

    /// The identity this profile carries, if it has one.
    pub fn identity(&self) -> Option<i32> {
        crate::normalize_id(self.id)
    }
}
