//! # Intrusive Linked List
//!
//! This module provides a doubly linked list whose nodes are visible to, and
//! owned by, the caller whenever they are not in a list.
//!
//! ## Core Components
//!
//! - [`list::LinkedList`]: an insertion ordered list with O(1) access to both ends.
//! - [`sorted::SortedList`]: a list that keeps itself ascending on insertion.
//! - [`node::Node`]: an owned, unlinked node; the unit that moves between lists.
//! - [`node::ListNode`]: the node itself, reached by reference for traversal.
//!
//! ## Ownership
//!
//! A list exclusively owns every node linked into it. `push_*` and `insert`
//! consume a [`node::Node`] and `pop_*` hands one back, so a node cannot be
//! in two lists at the same time, and the borrow checker keeps callbacks and
//! outstanding node references from modifying a list while it is traversed.
//!
//! Lists are single threaded containers: they are `Send`/`Sync` exactly when
//! their data is, and do no synchronisation of their own.

mod double;
mod sort;
mod traits;

pub mod iter;
pub mod list;
pub mod node;
pub mod sorted;

#[cfg(test)]
mod tests;
