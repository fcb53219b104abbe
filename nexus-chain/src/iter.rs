//! Iterators over a [`Queue`].

use core::iter::FusedIterator;
use std::marker::PhantomData;

use crate::{Key, Node, Queue, Storage};

/// Iterator over references to queue elements, head to tail.
///
/// Created by [`Queue::iter`]. Each call to `iter` starts a fresh traversal,
/// so a queue can be walked any number of times.
pub struct Iter<'a, T, S, K: Key> {
    storage: &'a S,
    current: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, S, K: Key> Iter<'a, T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    #[inline]
    pub(crate) fn new(storage: &'a S, head: K, len: usize) -> Self {
        Self {
            storage,
            current: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.current.is_none() {
            return None;
        }

        // A missing link ends the walk early instead of failing.
        let Some(node) = self.storage.get(self.current) else {
            self.remaining = 0;
            return None;
        };

        self.current = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}

impl<'a, T: 'a, S, K: Key + 'a> FusedIterator for Iter<'a, T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}

impl<T, S, K: Key> Clone for Iter<'_, T, S, K> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

/// Owning iterator that dequeues elements front to back.
///
/// Created by `Queue::into_iter`. Elements not yet yielded are dropped
/// together with the iterator.
pub struct IntoIter<T, S, K: Key>
where
    S: Storage<Node<T, K>, Key = K>,
{
    queue: Queue<T, S, K>,
}

impl<T, S, K: Key> IntoIter<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    #[inline]
    pub(crate) fn new(queue: Queue<T, S, K>) -> Self {
        Self { queue }
    }
}

impl<T, S, K: Key> Iterator for IntoIter<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_node().map(|node| node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T, S, K: Key> ExactSizeIterator for IntoIter<T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}

impl<T, S, K: Key> FusedIterator for IntoIter<T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}
