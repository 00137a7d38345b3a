//! List cell wrapping one player.

use generational_arena::Index;

use crate::domain::entities::Player;

/// Stable handle of a node stored in a [`PlayerList`](crate::domain::PlayerList).
///
/// Handles are generational: once a node is removed its handle never
/// resolves again, even if the slot is reused.
pub type NodeId = Index;

/// Node of the player list.
///
/// Owns its player for life; to change the player, replace the node.
/// `next`/`prev` are plain handles into the owning list's arena, not
/// ownership. Only the list rewrites them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerNode {
    player: Player,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

impl PlayerNode {
    pub fn new(player: Player) -> Self {
        Self::with_links(player, None, None)
    }

    /// Create a node with preset neighbor handles.
    ///
    /// Inserting the node into a list overwrites both links.
    pub fn with_links(player: Player, next: Option<NodeId>, prev: Option<NodeId>) -> Self {
        Self { player, next, prev }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Comparison key: the player's uid.
    pub fn key(&self) -> &str {
        self.player.uid()
    }

    pub fn name(&self) -> &str {
        self.player.name()
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub(crate) fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    pub(crate) fn set_prev(&mut self, prev: Option<NodeId>) {
        self.prev = prev;
    }

    pub(crate) fn detach(&mut self) {
        self.next = None;
        self.prev = None;
    }
}

impl From<Player> for PlayerNode {
    fn from(player: Player) -> Self {
        Self::new(player)
    }
}
