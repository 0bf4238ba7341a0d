//!  Storage is organized through [key_value::KeyValueStore].
//!  The basic idea is:
//!   - Every component owns a few keys of the store and never touches the others.
//!   - Each key holds one JSON list that is rewritten completely on every change.
//!   - Unreadable values are treated as empty lists, see [collection::load_collection]. Loads
//!     followed by a save keep the unreadable bytes under [collection::backup_key].

pub mod collection;
pub mod entities;
pub mod key_value;
