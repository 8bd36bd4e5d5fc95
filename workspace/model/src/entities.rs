//! Root for the SeaORM entity modules.
//! A player owns at most one profile through the `players.profile_id` column.

pub mod player;
pub mod player_profile;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::player::Entity as Player;
    pub use super::player_profile::Entity as PlayerProfile;
}
