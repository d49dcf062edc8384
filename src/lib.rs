//! Copy-on-write B-tree ordered by a caller-supplied comparator.
//!
//! This crate provides [`BTree`], an in-memory ordered set whose items are placed
//! by a comparator chosen when the tree is built, rather than by a trait on the item
//! type:
//!
//! - [`replace_or_insert`](BTree::replace_or_insert), [`get`](BTree::get) and
//!   [`delete`](BTree::delete) in O(log n)
//! - [`delete_min`](BTree::delete_min) / [`delete_max`](BTree::delete_max)
//! - Range scans with early exit: [`ascend_range`](BTree::ascend_range),
//!   [`descend_less_or_equal`](BTree::descend_less_or_equal) and friends
//! - O(1) [`Clone`] snapshots that copy nodes only when a mutation touches them
//!
//! # Example
//!
//! ```
//! use ordtree::BTree;
//!
//! // Degree 2: nodes hold between one and three items.
//! let by_id = |a: &(u32, &'static str), b: &(u32, &'static str)| a.0 < b.0;
//! let mut tree = BTree::with_comparator(2, by_id).unwrap();
//! tree.replace_or_insert((3, "carol"));
//! tree.replace_or_insert((1, "alice"));
//! tree.replace_or_insert((2, "bob"));
//!
//! // Equality is decided by the comparator alone.
//! assert_eq!(tree.get(&(2, "")), Some(&(2, "bob")));
//!
//! // Snapshots are cheap and isolated.
//! let snapshot = tree.clone();
//! tree.delete(&(1, ""));
//! assert_eq!(tree.len(), 2);
//! assert_eq!(snapshot.len(), 3);
//!
//! // Scans stop as soon as the callback says so.
//! let mut names = Vec::new();
//! snapshot.ascend_greater_or_equal(&(2, ""), |&(_, name)| {
//!     names.push(name);
//!     true
//! });
//! assert_eq!(names, ["bob", "carol"]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Any ordering** - A closure or the [`Natural`] order of [`Ord`] types
//! - **Configurable fan-out** - Pick the [`Degree`] per tree
//! - **`tracing`** (optional) - Emits structural events such as root splits
//!
//! # Implementation
//!
//! The tree is a classic B-tree: items live in both internal nodes and leaves.
//! Insertion splits full nodes on the way down and deletion grows minimal nodes on
//! the way down, so neither ever walks back up. Child links are atomically
//! reference-counted, which is what makes cloning O(1).

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod degree;
mod error;
mod less;
mod raw;

pub mod btree;

pub use btree::BTree;
pub use degree::Degree;
pub use error::{Error, Result};
pub use less::{Less, Natural};
