//! This crate exposes an unbalanced Binary Search Tree (BST) of unique keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores the
//! key that was inserted and will sometimes have child `Node`s. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its own
//!    key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than its
//!    own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest path
//! from the root `Node` to a leaf `Node`). [`BSTree`] never rebalances, so inserting keys in
//! sorted order produces a tree whose height equals its length. Random insertion order keeps the
//! height around `O(lg N)`.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. [`BSTree`] writes its keys into a [`Sink`] in any of the three
//! depth-first [`Order`]s.
//!
//! # Examples
//!
//! ```
//! use bstree::BSTree;
//!
//! let mut tree = BSTree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     assert!(tree.insert(key));
//! }
//!
//! // Keys are unique.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 7);
//!
//! assert!(tree.retrieve(&4));
//! assert!(!tree.retrieve(&6));
//!
//! let mut sorted = Vec::new();
//! tree.inorder(&mut sorted);
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
//!
//! let mut preorder = Vec::new();
//! tree.preorder(&mut preorder);
//! assert_eq!(preorder, [5, 3, 1, 4, 8, 7, 9]);
//!
//! // Copies share nothing with the original.
//! let copy = tree.clone();
//! tree.clear();
//! assert!(tree.is_empty());
//! assert_eq!(copy.len(), 7);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod sink;
mod tree;
mod util;


pub use error::Error;
pub use sink::Sink;
pub use tree::{BSTree, Order};
