//! An unbalanced BST of keys where every node owns its children through a `Box`. No rebalancing
//! happens, so the shape of the tree is decided entirely by insertion order.

use std::alloc::handle_alloc_error;
use std::cmp::Ordering;
use std::fmt;

use crate::sink::Sink;
use crate::util::try_box;
use crate::Error;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The child to descend into for a probe that compared `ord` to this node's key.
    fn child(&self, ord: Ordering) -> &Link<K> {
        match ord {
            Ordering::Less => &self.left,
            _ => &self.right,
        }
    }

    fn child_mut(&mut self, ord: Ordering) -> &mut Link<K> {
        match ord {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }
}

/// A position in the tree: the root link or one of a node's child links. It is either occupied by
/// a node or vacant.
///
/// Implemented for shared and exclusive borrows of a link so that [`search`] serves both lookups
/// and insertion.
trait Slot<K>: Sized {
    /// The key of the node occupying this slot.
    fn key(&self) -> Option<&K>;

    /// Moves to the child slot on the `ord` side of the occupying node. A vacant slot stays put.
    fn child(self, ord: Ordering) -> Self;
}

impl<'a, K> Slot<K> for &'a Link<K> {
    fn key(&self) -> Option<&K> {
        (**self).as_ref().map(|node| &node.key)
    }

    fn child(self, ord: Ordering) -> Self {
        match self {
            Some(node) => node.child(ord),
            None => self,
        }
    }
}

impl<'a, K> Slot<K> for &'a mut Link<K> {
    fn key(&self) -> Option<&K> {
        (**self).as_ref().map(|node| &node.key)
    }

    fn child(self, ord: Ordering) -> Self {
        match self {
            Some(node) => node.child_mut(ord),
            None => self,
        }
    }
}

/// Walks down from `slot` and returns the slot holding a key equal to `key`, or the vacant slot
/// where `key` would be attached.
fn search<K, S>(mut slot: S, key: &K) -> S
where
    K: Ord,
    S: Slot<K>,
{
    loop {
        let ord = slot.key().map(|probe| key.cmp(probe));
        match ord {
            None | Some(Ordering::Equal) => return slot,
            Some(ord) => slot = slot.child(ord),
        }
    }
}

/// A depth-first traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// A node's key, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node's key, then the right subtree. Yields keys in ascending
    /// order.
    In,
    /// The left subtree, then the right subtree, then the node's key.
    Post,
}

/// An unbalanced Binary Search Tree of unique keys.
///
/// Keys must be totally ordered by their [`Ord`] implementation. An `Ord` that is not a valid
/// total order leaves the relative placement of keys unspecified, but never causes memory
/// unsafety.
///
/// The tree is not synchronized. Share it between threads behind a lock.
pub struct BSTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for BSTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for BSTree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Clone for BSTree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|err| handle_alloc_error(err.layout()))
    }
}

impl<K> fmt::Debug for BSTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.walk(Order::In, |key| {
            set.entry(key);
        });
        set.finish()
    }
}

impl<K> Extend<K> for BSTree<K>
where
    K: Ord,
{
    /// Inserts every key. Keys already present are skipped.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for BSTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> BSTree<K> {
    /// Generates a new, empty `BSTree`.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// // Ascending insertion degenerates into a list.
    /// let tree: BSTree<_> = (0..5).collect();
    /// assert_eq!(tree.height(), 5);
    ///
    /// let tree: BSTree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(
                [&node.left, &node.right]
                    .into_iter()
                    .filter_map(|child| child.as_deref())
                    .map(|child| (child, depth + 1)),
            );
        }

        height
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        let released = std::mem::take(&mut self.len);

        // Rotate left children up until the node at hand has none, then drop it. Nothing recurses
        // and nothing allocates, however deep the tree is.
        let mut link = self.root.take();
        while let Some(mut node) = link {
            link = match node.left.take() {
                Some(mut left) => {
                    node.left = left.right.take();
                    left.right = Some(node);
                    Some(left)
                }
                None => node.right.take(),
            };
        }

        if released > 0 {
            log::debug!("cleared {} keys", released);
        }
    }

    /// Finds the stored key that compares equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let tree: BSTree<_> = ["b", "a"].into_iter().collect();
    ///
    /// assert_eq!(tree.get(&"a"), Some(&"a"));
    /// assert_eq!(tree.get(&"z"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        search(&self.root, key).as_ref().map(|node| &node.key)
    }

    /// Returns `true` if a key equal to `key` is stored.
    pub fn retrieve(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.get(key).is_some()
    }

    /// Inserts `key` if it is not already present. Returns whether it was inserted.
    ///
    /// Like the standard collections, this aborts through [`handle_alloc_error`] when a node cannot
    /// be allocated. Use [`try_insert`][Self::try_insert] to handle that case instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BSTree;
    ///
    /// let mut tree = BSTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        match self.try_insert(key) {
            Ok(inserted) => inserted,
            Err(err) => handle_alloc_error(err.layout()),
        }
    }

    /// Inserts `key` if it is not already present. Returns whether it was inserted.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the new node cannot be allocated. The tree is unchanged and
    /// `key` is dropped.
    pub fn try_insert(&mut self, key: K) -> Result<bool, Error>
    where
        K: Ord,
    {
        let slot = self.slot_mut(&key);
        if slot.is_some() {
            return Ok(false);
        }

        *slot = Some(try_box(Node::new(key))?);
        self.len += 1;
        log::trace!("inserted key, {} keys stored", self.len);
        Ok(true)
    }

    /// The slot holding `key` or the vacant slot a new node for `key` belongs in.
    fn slot_mut(&mut self, key: &K) -> &mut Link<K>
    where
        K: Ord,
    {
        search(&mut self.root, key)
    }

    /// Appends a clone of every key to `sink`, each node before its subtrees.
    pub fn preorder<S>(&self, sink: S)
    where
        K: Clone,
        S: Sink<K>,
    {
        self.traverse(Order::Pre, sink);
    }

    /// Appends a clone of every key to `sink` in ascending order.
    pub fn inorder<S>(&self, sink: S)
    where
        K: Clone,
        S: Sink<K>,
    {
        self.traverse(Order::In, sink);
    }

    /// Appends a clone of every key to `sink`, each node after its subtrees.
    pub fn postorder<S>(&self, sink: S)
    where
        K: Clone,
        S: Sink<K>,
    {
        self.traverse(Order::Post, sink);
    }

    /// Appends a clone of every key to `sink` in the given depth-first `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BSTree, Order};
    ///
    /// let tree: BSTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// let mut keys = Vec::new();
    /// tree.traverse(Order::Post, &mut keys);
    /// assert_eq!(keys, [1, 4, 3, 7, 9, 8, 5]);
    /// ```
    pub fn traverse<S>(&self, order: Order, mut sink: S)
    where
        K: Clone,
        S: Sink<K>,
    {
        self.walk(order, |key| sink.consume(key.clone()));
    }

    fn walk<'a>(&'a self, order: Order, mut visit: impl FnMut(&'a K)) {
        enum Step<'a, K> {
            Expand(&'a Node<K>),
            Visit(&'a K),
        }

        let mut stack: Vec<_> = self.root.as_deref().map(Step::Expand).into_iter().collect();
        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Visit(key) => {
                    visit(key);
                    continue;
                }
                Step::Expand(node) => node,
            };

            let left = node.left.as_deref().map(Step::Expand);
            let right = node.right.as_deref().map(Step::Expand);
            let key = Some(Step::Visit(&node.key));
            // Pushed in reverse since the stack pops the last one first.
            let steps = match order {
                Order::Pre => [right, left, key],
                Order::In => [right, key, left],
                Order::Post => [key, right, left],
            };
            stack.extend(steps.into_iter().flatten());
        }
    }

    /// Deep-copies the tree: same keys, same shape, no shared nodes.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if a node cannot be allocated. Whatever was copied so far is
    /// released and `self` is untouched.
    pub fn try_clone(&self) -> Result<Self, Error>
    where
        K: Clone,
    {
        let mut copy = Self::new();
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, &mut copy.root));
        }

        while let Some((source, slot)) = stack.pop() {
            let node = slot.insert(try_box(Node::new(source.key.clone()))?);
            let Node { left, right, .. } = &mut **node;
            if let Some(source_left) = source.left.as_deref() {
                stack.push((source_left, left));
            }
            if let Some(source_right) = source.right.as_deref() {
                stack.push((source_right, right));
            }
        }

        copy.len = self.len;
        log::debug!("cloned tree of {} keys", copy.len);
        Ok(copy)
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if a node cannot be allocated. `self` keeps its old contents.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), Error>
    where
        K: Clone,
    {
        *self = source.try_clone()?;
        Ok(())
    }
}
