//! A doubly linked list with caller-managed nodes, and a sorted variant.
//!
//! # Examples
//!
//! ```
//! use mola_dlist::linked_list::intrusive::{list::LinkedList, node::Node, sorted::SortedList};
//!
//! let mut list = LinkedList::new();
//! list.push_back(Node::allocate(1).unwrap());
//! list.push_back(Node::allocate(2).unwrap());
//! list.emplace_back(3).unwrap();
//!
//! assert_eq!(list.count(), 3);
//!
//! let front = list.pop_front().unwrap();
//! assert_eq!(*front.data(), 1);
//! assert_eq!(list.count(), 2);
//!
//! // The popped node is ours; it can move into another list.
//! let mut sorted = SortedList::new(|a: &i32, b: &i32| a > b);
//! sorted.emplace_insert(5).unwrap();
//! sorted.insert(Some(front));
//! sorted.emplace_insert(3).unwrap();
//!
//! let values: Vec<i32> = sorted.iter().copied().collect();
//! assert_eq!(values, vec![1, 3, 5]);
//! ```
pub mod intrusive;
