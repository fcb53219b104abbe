//! Singly-linked FIFO queue over arena storage.
//!
//! A textbook singly-linked chain: elements are appended at the tail and
//! removed from the head, with search, indexing, slicing and concatenation
//! implemented as linear walks over the chain.
//!
//! # Design
//!
//! Nodes are not heap boxes linked by pointer. They live in a slot arena
//! owned by the queue and link to their successor by key:
//!
//! ```text
//! Storage (Slab)  - owns every node, hands out stable keys
//! Queue           - head key, tail key, length
//! Node            - element + key of the next node (or NONE)
//! ```
//!
//! The head key is the only way into the chain; the tail key is a plain
//! copy used for O(1) append. Removing a node from storage drops it, so the
//! chain can never dangle or form a cycle.
//!
//! # Quick Start
//!
//! ```
//! use nexus_chain::{Queue, QueueError, SearchResult};
//!
//! let mut queue: Queue<u64> = Queue::new();
//! queue.add(1);
//! queue.add(2);
//! queue.add(3);
//!
//! assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(queue.search(&2, |a, b| a == b), Ok(SearchResult::Found));
//! assert_eq!(queue.at(5), Err(QueueError::IndexOutOfBounds { index: 5, len: 3 }));
//!
//! assert_eq!(queue.remove(), Ok(1));
//! assert_eq!(queue.to_string(), "[0]: 2\n[1]: 3\n");
//! ```
//!
//! # Concatenation
//!
//! ```
//! use nexus_chain::Queue;
//!
//! let a: Queue<u64> = (1..=2).collect();
//! let b: Queue<u64> = (3..=4).collect();
//!
//! // New queue, sources untouched
//! let c = a.concat(&b);
//! assert_eq!(c.len(), 4);
//!
//! // In place, rhs untouched
//! let mut d = a.clone();
//! d += &b;
//! assert_eq!(d.last(), Some(&4));
//! ```
//!
//! # Semantics Worth Knowing
//!
//! | Operation | Behavior |
//! |-----------|----------|
//! | `==` | Compares length and first element only |
//! | [`Queue::slice`] | Upper bound is **inclusive**: `slice(0..1)` yields two elements |
//! | [`Queue::search`] | A miss is `Ok(NotFound)`; an empty queue is `Err(Empty)` |
//! | [`Queue::at`] | Bounds-checked, `Err(IndexOutOfBounds)` past the end |
//!
//! # Thread Safety
//!
//! None. The queue has no internal locking; share it behind a mutex.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Queue`] as a sequence

#![warn(missing_docs)]

pub mod error;
pub mod iter;
pub mod key;
pub mod node;
pub mod queue;
pub mod search;
pub mod storage;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{QueueError, Result};
pub use iter::{IntoIter, Iter};
pub use key::Key;
pub use node::Node;
pub use queue::{Queue, SlabStorage};
pub use search::SearchResult;
pub use storage::Storage;
