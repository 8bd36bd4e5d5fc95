use common::{Player, Profile};
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::player_store::PlayerStore;
use crate::profile_store::ProfileStore;

/// Binds players to profiles on top of the two stores.
///
/// Every operation is a single store call, or a read followed by one write.
/// Isolation between concurrent writers is left to the database.
#[derive(Clone, Debug)]
pub struct RelationshipManager {
    players: PlayerStore,
    profiles: ProfileStore,
}

impl RelationshipManager {
    pub fn new(players: PlayerStore, profiles: ProfileStore) -> Self {
        Self { players, profiles }
    }

    /// Wires both stores onto one connection.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::new(PlayerStore::new(db.clone()), ProfileStore::new(db))
    }

    /// Creates a player, together with a new profile when one is given.
    /// Any id on the incoming profile is discarded.
    #[instrument(skip(self))]
    pub async fn add_player(&self, name: String, profile: Option<Profile>) -> Result<Player> {
        let profile = profile.map(|profile| Profile {
            id: None,
            ..profile
        });
        let player = self.players.create_or_update(Player::new(name, profile)).await?;
        info!("Added player {:?}", player.id);
        Ok(player)
    }

    /// Creates a standalone profile.
    #[instrument(skip(self))]
    pub async fn add_profile(&self, twitter_handle: Option<String>) -> Result<Profile> {
        let profile = self
            .profiles
            .create_or_update(Profile {
                id: None,
                twitter_handle,
            })
            .await?;
        info!("Added profile {:?}", profile.id);
        Ok(profile)
    }

    /// Replaces the player's profile with `profile`, new or already persisted.
    ///
    /// The profile owned before is left in storage, unlinked. Only deleting
    /// the player cascades.
    #[instrument(skip(self))]
    pub async fn assign_profile(&self, player_id: i32, profile: Profile) -> Result<Player> {
        let mut player = self.players.find_by_id(player_id).await?;
        if let Some(previous) = player.profile_id() {
            debug!("Player {} replaces profile {}", player_id, previous);
        }

        player.profile = Some(profile);
        let player = self.players.create_or_update(player).await?;
        info!(
            "Assigned profile {:?} to player {}",
            player.profile_id(),
            player_id
        );
        Ok(player)
    }

    /// Deletes the player and the profile it owns.
    #[instrument(skip(self))]
    pub async fn delete_player(&self, player_id: i32) -> Result<()> {
        self.players.delete_by_id(player_id).await
    }

    /// Deletes the profile without looking at its owner.
    ///
    /// A profile still owned by a player is rejected by the storage engine's
    /// foreign key and surfaces as a constraint violation.
    #[instrument(skip(self))]
    pub async fn delete_profile(&self, profile_id: i32) -> Result<()> {
        self.profiles.delete_by_id(profile_id).await
    }

    pub async fn all_players(&self) -> Result<Vec<Player>> {
        self.players.list_all().await
    }

    pub async fn get_player(&self, player_id: i32) -> Result<Player> {
        self.players.find_by_id(player_id).await
    }

    pub async fn all_profiles(&self) -> Result<Vec<Profile>> {
        self.profiles.list_all().await
    }

    pub async fn get_profile(&self, profile_id: i32) -> Result<Profile> {
        self.profiles.find_by_id(profile_id).await
    }
}
