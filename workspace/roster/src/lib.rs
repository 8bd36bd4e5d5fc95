//! Storage and relationship logic for players and their profiles.

pub mod error;
pub mod player_store;
pub mod profile_store;
pub mod relationship;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Result, RosterError};
pub use player_store::PlayerStore;
pub use profile_store::ProfileStore;
pub use relationship::RelationshipManager;
