//! A self-balancing ordered key-value map backed by an [AVL tree].
//!
//! An [`AvlMap`] maps totally-ordered keys to opaque values, guaranteeing
//! O(log n) lookups, inserts and removals by rebalancing the underlying binary
//! search tree as it is mutated. Entries are yielded in ascending key order by
//! [`AvlMap::iter()`], with pre-order and post-order walks available for
//! callers that care about the tree shape.
//!
//! ```
//! use avlmap::AvlMap;
//!
//! let mut m = AvlMap::default();
//!
//! m.insert(24, "bananas");
//! m.insert(42, "platanos");
//!
//! assert_eq!(m.get(&42), Some(&"platanos"));
//! assert_eq!(m.remove(&24), Some("bananas"));
//! assert_eq!(m.len(), 1);
//! ```
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::todo,
    clippy::dbg_macro
)]

mod entry;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use entry::*;
pub use iter::OwnedIter;
pub use tree::*;
