//! Destinations for the keys emitted by a traversal.
//!
//! A traversal writes every key exactly once, in order, into a [`Sink`]. Growable sequences
//! implement it directly; anything else (a stream, a channel, a counter) can be adapted with
//! [`from_fn`].
//!
//! # Examples
//!
//! ```
//! use bstree::{sink, BSTree};
//!
//! let tree: BSTree<_> = [2, 1, 3].into_iter().collect();
//!
//! let mut sum = 0;
//! tree.inorder(sink::from_fn(|key: i32| sum += key));
//! assert_eq!(sum, 6);
//! ```

use std::collections::VecDeque;

/// Something a traversal can append keys to.
pub trait Sink<T> {
    /// Appends `item`.
    fn consume(&mut self, item: T);
}

impl<T> Sink<T> for Vec<T> {
    fn consume(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Sink<T> for VecDeque<T> {
    fn consume(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T, S> Sink<T> for &mut S
where
    S: Sink<T> + ?Sized,
{
    fn consume(&mut self, item: T) {
        (**self).consume(item);
    }
}

/// A [`Sink`] that hands every item to a closure. Created by [`from_fn`].
#[derive(Clone, Debug)]
pub struct FromFn<F>(F);

/// Wraps a closure into a [`Sink`].
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut(T),
{
    FromFn(f)
}

impl<T, F> Sink<T> for FromFn<F>
where
    F: FnMut(T),
{
    fn consume(&mut self, item: T) {
        (self.0)(item);
    }
}
