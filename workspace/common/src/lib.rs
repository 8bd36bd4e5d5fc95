//! Transport types shared between the stores and the HTTP layer.
//! Both records carry an optional `id`: `None` means the record has not been
//! saved yet and the store assigns one on insert.

mod player;
mod profile;

pub use player::Player;
pub use profile::Profile;

/// Normalizes a client supplied identity. Zero and negative values were used
/// for unsaved records, so they count as "no identity".
pub(crate) fn normalize_id(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id > 0)
}
