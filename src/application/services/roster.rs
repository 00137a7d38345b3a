//! Roster loading service
//!
//! Builds a [`PlayerList`] from a TOML roster file. Nothing is written back.
//!
//! ```toml
//! [[players]]
//! uid = "20"
//! name = "John Smith"
//!
//! [[players]]
//! uid = "23"
//! name = "Stephen Curry"
//! position = 0    # optional, insert at this index instead of appending
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Player, PlayerList, PlayerNode};
use crate::infrastructure::traits::FileSystem;

#[derive(Debug, Deserialize)]
struct RawRoster {
    #[serde(default)]
    players: Vec<RawEntry>,
}

/// Fields stay untyped until the domain validates them, so that `uid = 20`
/// is reported as a uid error rather than a parse error.
#[derive(Debug, Deserialize)]
struct RawEntry {
    uid: toml::Value,
    name: toml::Value,
    #[serde(default)]
    position: Option<usize>,
}

/// Service for loading player rosters.
pub struct RosterService {
    fs: Arc<dyn FileSystem>,
}

impl RosterService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and parse the roster at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<PlayerList> {
        if !self.fs.is_file(path) {
            return Err(ApplicationError::RosterNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read roster", path)?;
        self.parse(&content, path)
    }

    /// Build a list from roster content.
    ///
    /// Entries are applied in file order: appended at the tail, or inserted
    /// at `position` when one is given. The first invalid entry aborts the
    /// load and is reported by its zero-based index.
    pub fn parse(&self, content: &str, path: &Path) -> ApplicationResult<PlayerList> {
        let raw: RawRoster = toml::from_str(content).map_err(|e| ApplicationError::RosterFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut list = PlayerList::new();
        for (index, entry) in raw.players.iter().enumerate() {
            let invalid = |source| ApplicationError::InvalidEntry {
                path: path.to_path_buf(),
                index,
                source,
            };

            let player = Player::from_values(&entry.uid, &entry.name).map_err(invalid)?;
            let node = PlayerNode::new(player);
            match entry.position {
                Some(position) => {
                    list.insert_at_position(node, position).map_err(invalid)?;
                }
                None => {
                    list.insert_at_tail(node);
                }
            }
        }

        debug!("loaded {} players from {}", list.len(), path.display());
        Ok(list)
    }
}
