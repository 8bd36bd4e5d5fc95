//! Persistence of [`Profile`] records.
//!
//! The free functions take any [`ConnectionTrait`] so the player store can run
//! them inside its own transaction when cascading a save.

use common::Profile;
use model::entities::player_profile;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{Result, RosterError};

pub(crate) fn to_profile(model: player_profile::Model) -> Profile {
    Profile {
        id: Some(model.id),
        twitter_handle: model.twitter_handle,
    }
}

/// Inserts `profile` when it carries no identity, otherwise updates the stored record.
///
/// An update only overwrites the twitter handle when one is supplied, so a bare
/// `{id}` reference keeps the stored value.
pub(crate) async fn save<C>(conn: &C, profile: Profile) -> Result<Profile>
where
    C: ConnectionTrait,
{
    match profile.identity() {
        None => {
            trace!("Inserting new profile");
            let inserted = player_profile::ActiveModel {
                twitter_handle: Set(profile.twitter_handle),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            debug!("Profile inserted with ID: {}", inserted.id);
            Ok(to_profile(inserted))
        }
        Some(id) => {
            let existing = find(conn, id).await?;
            let Some(twitter_handle) = profile.twitter_handle else {
                trace!("Profile {} referenced without changes", id);
                return Ok(to_profile(existing));
            };

            let mut active: player_profile::ActiveModel = existing.into();
            active.twitter_handle = Set(Some(twitter_handle));
            let updated = active.update(conn).await?;
            debug!("Profile {} updated", id);
            Ok(to_profile(updated))
        }
    }
}

pub(crate) async fn find<C>(conn: &C, id: i32) -> Result<player_profile::Model>
where
    C: ConnectionTrait,
{
    match player_profile::Entity::find_by_id(id).one(conn).await? {
        Some(model) => Ok(model),
        None => {
            warn!("Profile with ID {} not found", id);
            Err(RosterError::profile_not_found(id))
        }
    }
}

pub(crate) async fn delete<C>(conn: &C, id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = player_profile::Entity::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        warn!("No profile was deleted with ID: {}", id);
        return Err(RosterError::profile_not_found(id));
    }
    debug!("Profile {} deleted", id);
    Ok(())
}

/// Store for standalone profile operations.
#[derive(Clone, Debug)]
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn create_or_update(&self, profile: Profile) -> Result<Profile> {
        let saved = save(&self.db, profile).await?;
        info!("Saved profile with ID: {:?}", saved.id);
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Profile> {
        find(&self.db, id).await.map(to_profile)
    }

    /// All stored profiles, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Profile>> {
        let profiles = player_profile::Entity::find()
            .order_by_asc(player_profile::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Retrieved {} profiles", profiles.len());
        Ok(profiles.into_iter().map(to_profile).collect())
    }

    /// Removes the profile. Any player still owning it is not touched here;
    /// the `players.profile_id` foreign key makes the database reject the delete.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        delete(&self.db, id).await?;
        info!("Deleted profile with ID: {}", id);
        Ok(())
    }
}
