//! This crate exposes a Binary Search Tree (BST) together with the ordered
//! sequences it produces and the traversal-order queries built on top of them.
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
//! The tree in this crate stores at most one node per distinct value -
//! inserting a value that is already present is a no-op.
//!
//! ## Traversals
//!
//! The tree produces its values as [`List`][list::List]s in four linear
//! orders: preorder, inorder, postorder (depth-first), and level order
//! (breadth-first). Because of the invariants above, the inorder sequence is
//! exactly the ascending sort of every value in the tree.
//!
//! On top of those sequences the tree answers predecessor/successor queries
//! *in a chosen traversal order*: the node holding the value immediately
//! before or after a given value in that order's output. Only the inorder
//! pair means "numerically adjacent value"; the preorder and postorder pairs
//! are adjacency in those orders' output, which depends on the shape of the
//! tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod list;
pub mod tree;
