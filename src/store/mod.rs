//! Keyed in-memory stores for phrase groups and position values
//!
//! Arenas of records behind locks, keyed by stable identifiers. Only the
//! narrow lookup contract crosses into the engine; everything else is the
//! CRUD surface the transport layer drives.

mod phrase;
mod position;

pub use phrase::{PhraseGroupRequest, PhraseGroupUpdate, PhraseStore};
pub use position::PositionStore;
