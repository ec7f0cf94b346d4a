//! This crate exposes a Binary Search Tree (BST) over unique `i64` keys,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`), and in-order traversal
//! visits values in ascending sorted order.
//!
//! This tree does **not** rebalance itself on every mutation. Instead,
//! [`Tree::from_values`] builds a minimal-height tree up front by repeatedly
//! picking the midpoint of the sorted, deduplicated input as a subtree root,
//! and [`Tree::rebalance`] rebuilds the same way on demand after a skewing run
//! of inserts or removes. [`Tree::is_balanced`] reports whether a rebuild is
//! worth it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

pub use tree::{Node, Tree};

#[cfg(test)]
mod test;
