//! Domain layer: players and the list that holds them
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod list;
pub mod node;

pub use entities::{Player, PlayerName, PlayerUid, ANONYMOUS};
pub use error::{DomainError, DomainResult};
pub use list::{Iter, IterRev, ListFormat, PlayerList, DEFAULT_SEPARATOR, EMPTY_LIST_MESSAGE};
pub use node::{NodeId, PlayerNode};
