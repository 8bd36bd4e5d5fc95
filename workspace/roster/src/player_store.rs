//! Persistence of [`Player`] records.
//!
//! The player is the owning side of the one-to-one link: saving or deleting a
//! player saves or deletes its profile in the same transaction.

use common::Player;
use model::entities::{player, player_profile};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{Result, RosterError};
use crate::profile_store::{self, to_profile};

/// Builds a [`Player`] from its row and the resolved profile row.
///
/// A `profile_id` without a matching row resolves to no profile.
fn to_player(model: player::Model, profile: Option<player_profile::Model>) -> Player {
    if profile.is_none() {
        if let Some(profile_id) = model.profile_id {
            warn!(
                "Player {} references missing profile {}",
                model.id, profile_id
            );
        }
    }

    Player {
        id: Some(model.id),
        name: model.name,
        profile: profile.map(to_profile),
    }
}

async fn find_with_profile<C>(conn: &C, id: i32) -> Result<Player>
where
    C: ConnectionTrait,
{
    match player::Entity::find_by_id(id)
        .find_also_related(player_profile::Entity)
        .one(conn)
        .await?
    {
        Some((model, profile)) => Ok(to_player(model, profile)),
        None => {
            warn!("Player with ID {} not found", id);
            Err(RosterError::player_not_found(id))
        }
    }
}

/// Store for players and the cascades onto their profiles.
#[derive(Clone, Debug)]
pub struct PlayerStore {
    db: DatabaseConnection,
}

impl PlayerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates the player, saving the embedded profile first.
    ///
    /// A player saved without a profile is unlinked from any profile it owned.
    /// The previously owned profile stays in storage.
    #[instrument(skip(self))]
    pub async fn create_or_update(&self, player: Player) -> Result<Player> {
        let player_id = player.identity();
        let txn = self.db.begin().await?;

        let profile = match player.profile {
            Some(profile) => Some(profile_store::save(&txn, profile).await?),
            None => None,
        };
        let profile_id = profile.as_ref().and_then(|p| p.id);

        let saved = match player_id {
            None => {
                trace!("Inserting new player '{}'", player.name);
                player::ActiveModel {
                    name: Set(player.name),
                    profile_id: Set(profile_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
            Some(id) => {
                let existing = match player::Entity::find_by_id(id).one(&txn).await? {
                    Some(existing) => existing,
                    None => {
                        warn!("Player with ID {} not found for update", id);
                        return Err(RosterError::player_not_found(id));
                    }
                };
                if existing.profile_id.is_some() && existing.profile_id != profile_id {
                    debug!(
                        "Player {} unlinks profile {:?}, leaving it in storage",
                        id, existing.profile_id
                    );
                }

                let mut active: player::ActiveModel = existing.into();
                active.name = Set(player.name);
                active.profile_id = Set(profile_id);
                active.update(&txn).await?
            }
        };

        txn.commit().await?;
        info!(
            "Saved player with ID: {}, profile: {:?}",
            saved.id, saved.profile_id
        );

        Ok(Player {
            id: Some(saved.id),
            name: saved.name,
            profile,
        })
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Player> {
        find_with_profile(&self.db, id).await
    }

    /// All players with their profiles resolved, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Player>> {
        let rows = player::Entity::find()
            .find_also_related(player_profile::Entity)
            .order_by_asc(player::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Retrieved {} players", rows.len());

        Ok(rows
            .into_iter()
            .map(|(model, profile)| to_player(model, profile))
            .collect())
    }

    /// Deletes the player and the profile it owns, if any.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        let existing = match player::Entity::find_by_id(id).one(&txn).await? {
            Some(existing) => existing,
            None => {
                warn!("Player with ID {} not found for deletion", id);
                return Err(RosterError::player_not_found(id));
            }
        };

        // The player row goes first, it holds the foreign key.
        player::Entity::delete_by_id(id).exec(&txn).await?;

        if let Some(profile_id) = existing.profile_id {
            match profile_store::delete(&txn, profile_id).await {
                Ok(()) => debug!("Cascaded delete to profile {}", profile_id),
                // Dangling reference, nothing left to cascade to
                Err(RosterError::NotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        txn.commit().await?;
        info!("Deleted player with ID: {}", id);
        Ok(())
    }
}
