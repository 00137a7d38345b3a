//! In-memory player registry.
//!
//! Players ([`domain::Player`]) carry a validated uid and name. Each player is
//! wrapped in a [`domain::PlayerNode`] and kept in a [`domain::PlayerList`], a
//! doubly-linked list whose nodes live in a generational arena and link to
//! their neighbors by handle.
//!
//! ```
//! use playerlist::domain::{Player, PlayerList, PlayerNode};
//!
//! let mut list = PlayerList::new();
//! list.insert_at_tail(PlayerNode::new(Player::new("20", "John Smith")?));
//! list.insert_at_tail(PlayerNode::new(Player::new("023", "Stephen Curry")?));
//!
//! assert_eq!(list.keys(), vec!["20", "23"]);
//! assert_eq!(list.display(false), "23'Stephen Curry' -> 20'John Smith'");
//! # Ok::<(), playerlist::domain::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
