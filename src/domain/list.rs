//! Arena-backed doubly-linked list of players.

use generational_arena::Arena;
use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{NodeId, PlayerNode};

/// Separator placed between rendered nodes.
pub const DEFAULT_SEPARATOR: &str = " -> ";
/// Rendering of a list without nodes.
pub const EMPTY_LIST_MESSAGE: &str = "Empty list";

/// How [`PlayerList::display_with`] renders a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFormat {
    pub separator: String,
    pub empty_message: String,
}

impl Default for ListFormat {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            empty_message: EMPTY_LIST_MESSAGE.to_string(),
        }
    }
}

/// Doubly-linked list of [`PlayerNode`]s.
///
/// Nodes live in a generational arena and refer to their neighbors by
/// [`NodeId`]. `head`, `tail` and `len` always agree with the chain:
/// - empty: no head, no tail, `len == 0`
/// - one node: `head == tail`, both links unset
/// - otherwise `head.prev` and `tail.next` are unset, and walking `next`
///   `len - 1` times from head reaches tail (and back via `prev`)
///
/// All link rewrites happen here. A failed operation leaves the list as it was.
#[derive(Debug, Clone)]
pub struct PlayerList {
    arena: Arena<PlayerNode>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl Default for PlayerList {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerList {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn head_node(&self) -> Option<&PlayerNode> {
        self.head.and_then(|id| self.get(id))
    }

    pub fn tail_node(&self) -> Option<&PlayerNode> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Resolve a handle; `None` once the node has been removed.
    pub fn get(&self, id: NodeId) -> Option<&PlayerNode> {
        self.arena.get(id)
    }

    #[instrument(level = "trace", skip(self, node))]
    pub fn insert_at_head(&mut self, mut node: PlayerNode) -> NodeId {
        trace!(key = node.key(), "insert at head");
        node.set_prev(None);
        node.set_next(self.head);
        let id = self.arena.insert(node);

        match self.head {
            Some(old_head) => self.link_prev(old_head, Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    #[instrument(level = "trace", skip(self, node))]
    pub fn insert_at_tail(&mut self, mut node: PlayerNode) -> NodeId {
        trace!(key = node.key(), "insert at tail");
        node.set_next(None);
        node.set_prev(self.tail);
        let id = self.arena.insert(node);

        match self.tail {
            Some(old_tail) => self.link_next(old_tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Insert so that the node ends up at zero-based `position`.
    ///
    /// Valid positions are `0..=len`; `0` inserts at the head and `len`
    /// appends at the tail. Interior positions walk from the head, O(position).
    #[instrument(level = "trace", skip(self, node))]
    pub fn insert_at_position(
        &mut self,
        mut node: PlayerNode,
        position: usize,
    ) -> DomainResult<NodeId> {
        if position > self.len {
            return Err(DomainError::PositionOutOfRange {
                position,
                len: self.len,
            });
        }
        if position == 0 {
            return Ok(self.insert_at_head(node));
        }
        if position == self.len {
            return Ok(self.insert_at_tail(node));
        }

        let before = self
            .iter()
            .nth(position - 1)
            .map(|(id, _)| id)
            .ok_or(DomainError::PositionOutOfRange {
                position,
                len: self.len,
            })?;
        let after = self.get(before).and_then(PlayerNode::next);
        trace!(key = node.key(), position, "splice");

        node.set_prev(Some(before));
        node.set_next(after);
        let id = self.arena.insert(node);

        self.link_next(before, Some(id));
        if let Some(after) = after {
            self.link_prev(after, Some(id));
        }
        self.len += 1;
        Ok(id)
    }

    /// Remove the first node and hand it back detached.
    #[instrument(level = "trace", skip(self))]
    pub fn delete_head(&mut self) -> DomainResult<PlayerNode> {
        let head = self.head.ok_or(DomainError::EmptyList)?;
        let mut node = self.arena.remove(head).ok_or(DomainError::EmptyList)?;

        self.head = node.next();
        match self.head {
            Some(new_head) => self.link_prev(new_head, None),
            None => self.tail = None,
        }
        self.len -= 1;
        node.detach();
        Ok(node)
    }

    /// Remove the last node and hand it back detached.
    #[instrument(level = "trace", skip(self))]
    pub fn delete_tail(&mut self) -> DomainResult<PlayerNode> {
        let tail = self.tail.ok_or(DomainError::EmptyList)?;
        let mut node = self.arena.remove(tail).ok_or(DomainError::EmptyList)?;

        self.tail = node.prev();
        match self.tail {
            Some(new_tail) => self.link_next(new_tail, None),
            None => self.head = None,
        }
        self.len -= 1;
        node.detach();
        Ok(node)
    }

    /// First node, scanning head to tail, whose key equals `key`.
    pub fn find_node_with_key(&self, key: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.key() == key)
            .map(|(id, _)| id)
    }

    /// Delete the first node whose key equals `key`.
    ///
    /// Returns `false`, leaving the list untouched, when no node matches.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_node_with_key(&mut self, key: &str) -> bool {
        match self.find_node_with_key(key) {
            Some(id) => self.remove(id).is_some(),
            None => {
                debug!("no node with key {}", key);
                false
            }
        }
    }

    /// Unlink the node behind `id`, wherever it sits in the chain.
    pub fn remove(&mut self, id: NodeId) -> Option<PlayerNode> {
        if self.head == Some(id) {
            return self.delete_head().ok();
        }
        if self.tail == Some(id) {
            return self.delete_tail().ok();
        }

        // interior node: both neighbors exist
        let mut node = self.arena.remove(id)?;
        if let Some(prev) = node.prev() {
            self.link_next(prev, node.next());
        }
        if let Some(next) = node.next() {
            self.link_prev(next, node.prev());
        }
        self.len -= 1;
        node.detach();
        Some(node)
    }

    /// Head-to-tail traversal. Every call starts afresh.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Tail-to-head traversal. Every call starts afresh.
    pub fn iter_rev(&self) -> IterRev<'_> {
        IterRev {
            list: self,
            cursor: self.tail,
        }
    }

    /// Keys in head-to-tail order.
    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|(_, node)| node.key()).collect()
    }

    /// Render with the default separator and empty marker.
    pub fn display(&self, forward: bool) -> String {
        self.display_with(&ListFormat::default(), forward)
    }

    /// Render each node as `key'name'`, joined by the configured separator.
    pub fn display_with(&self, format: &ListFormat, forward: bool) -> String {
        if self.is_empty() {
            return format.empty_message.clone();
        }
        let render = |(_, node): (NodeId, &PlayerNode)| format!("{}'{}'", node.key(), node.name());
        if forward {
            self.iter().map(render).join(&format.separator)
        } else {
            self.iter_rev().map(render).join(&format.separator)
        }
    }

    /// Debug line for one node, naming its neighbors by key.
    ///
    /// `PlayerNode id: 23, next: 42, prev: 20`
    pub fn describe(&self, id: NodeId) -> Option<String> {
        let node = self.get(id)?;
        let key_of = |link: Option<NodeId>| {
            link.and_then(|l| self.get(l))
                .map_or("None", |neighbor| neighbor.key())
        };
        Some(format!(
            "PlayerNode id: {}, next: {}, prev: {}",
            node.key(),
            key_of(node.next()),
            key_of(node.prev())
        ))
    }

    fn link_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.set_next(next);
        }
    }

    fn link_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.set_prev(prev);
        }
    }
}

impl<'a> IntoIterator for &'a PlayerList {
    type Item = (NodeId, &'a PlayerNode);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a> {
    list: &'a PlayerList,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a PlayerNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.get(id)?;
        self.cursor = node.next();
        Some((id, node))
    }
}

pub struct IterRev<'a> {
    list: &'a PlayerList,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for IterRev<'a> {
    type Item = (NodeId, &'a PlayerNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.get(id)?;
        self.cursor = node.prev();
        Some((id, node))
    }
}
