//! Singly-linked FIFO queue over arena storage.
//!
//! Nodes live in a [`Storage`] arena owned by the queue and link to their
//! successor by [`Key`]. The queue keeps the head key (the entry point into
//! the chain), a copy of the tail key for O(1) append, and the length.
//!
//! # Invariants
//!
//! - `len` equals the number of nodes reachable from `head`
//! - `head` is `NONE` iff `len == 0`; `tail` is the last node iff `len > 0`
//! - storage holds exactly the nodes of the chain, nothing else
//!
//! # Example
//!
//! ```
//! use nexus_chain::Queue;
//!
//! let mut queue: Queue<u64> = Queue::new();
//! queue.add(1);
//! queue.add(2);
//! queue.add(3);
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.first(), Some(&1));
//! assert_eq!(queue.last(), Some(&3));
//!
//! assert_eq!(queue.remove(), Ok(1));
//! assert_eq!(queue.len(), 2);
//! ```
//!
//! # Custom Storage
//!
//! Any [`Storage`] with a `Default` impl can back a queue. The default is a
//! [`slab::Slab`], which can be pre-sized:
//!
//! ```
//! use nexus_chain::{Queue, SlabStorage};
//!
//! let mut queue: Queue<u64> = Queue::with_storage(SlabStorage::with_capacity(1024));
//! queue.add(7);
//! assert_eq!(queue.first(), Some(&7));
//! ```

use core::fmt;
use core::ops::{AddAssign, Index, Range};
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::iter::{IntoIter, Iter};
use crate::{Key, Node, QueueError, Result, SearchResult, Storage};

/// Default storage backend: a growable slab of nodes keyed by `usize`.
pub type SlabStorage<T> = slab::Slab<Node<T, usize>>;

/// A singly-linked FIFO queue.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (default [`SlabStorage<T>`])
/// - `K`: Key type (default `usize`)
///
/// # Concurrency
///
/// No internal locking. Wrap the queue in a mutex to share it between
/// threads.
pub struct Queue<T, S = SlabStorage<T>, K: Key = usize>
where
    S: Storage<Node<T, K>, Key = K>,
{
    storage: S,
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T, S, K: Key> Default for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<T, S, K: Key> Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K> + Default,
{
    /// Creates an empty queue with default storage.
    #[inline]
    pub fn new() -> Self {
        Self::with_storage(S::default())
    }
}

impl<T, S, K: Key> Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    /// Creates an empty queue over the given storage.
    ///
    /// Any values already in `storage` are dropped.
    pub fn with_storage(mut storage: S) -> Self {
        storage.clear();
        Self {
            storage,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Add / remove
    // ========================================================================

    /// Appends an element at the tail. O(1).
    pub fn add(&mut self, element: T) {
        let key = self.storage.insert(Node::new(element));

        if self.tail.is_none() {
            self.head = key;
        } else {
            let tail = self.storage.get_mut(self.tail);
            debug_assert!(tail.is_some(), "tail key missing from storage");
            if let Some(tail) = tail {
                tail.next = key;
            }
        }

        self.tail = key;
        self.len += 1;
    }

    /// Removes and returns the element at the head. O(1).
    ///
    /// With an optional element type, `Ok(None)` means the dequeued element
    /// was itself `None`, which is distinct from the queue being empty.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_chain::{Queue, QueueError};
    ///
    /// let mut queue: Queue<Option<u8>> = Queue::new();
    /// queue.add(None);
    ///
    /// assert_eq!(queue.remove(), Ok(None));
    /// assert_eq!(queue.remove(), Err(QueueError::Empty { op: "remove" }));
    /// ```
    pub fn remove(&mut self) -> Result<T> {
        match self.pop_node() {
            Some(node) => Ok(node.data),
            None => Err(self.empty_error("remove")),
        }
    }

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue is already empty.
    pub fn empty_queue(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(self.empty_error("empty_queue"));
        }

        let released = self.len;
        // Storage holds only chain nodes, so clearing it releases the chain.
        self.storage.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;

        debug!(released, "emptied queue");
        Ok(())
    }

    /// Detaches the head node, severing its link to the rest of the chain.
    pub(crate) fn pop_node(&mut self) -> Option<Node<T, K>> {
        if self.head.is_none() {
            return None;
        }

        let node = self.storage.remove(self.head);
        debug_assert!(node.is_some(), "head key missing from storage");
        let mut node = node?;
        self.head = node.next;
        node.next = K::NONE;
        self.len -= 1;

        if self.head.is_none() {
            self.tail = K::NONE;
        }

        Some(node)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Scans head to tail for an element matching `target` under `predicate`.
    ///
    /// `predicate` is called as `predicate(target, element)` in insertion
    /// order and the scan stops at the first match. The walk is bounded to
    /// [`len`](Self::len) steps.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue is empty. A miss is
    /// reported as [`SearchResult::NotFound`], not as an error.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_chain::{Queue, SearchResult};
    ///
    /// let queue: Queue<&str> = ["apple", "Banana"].into_iter().collect();
    ///
    /// let result = queue
    ///     .search(&"banana", |a, b| a.eq_ignore_ascii_case(b))
    ///     .unwrap();
    /// assert_eq!(result, SearchResult::Found);
    /// ```
    pub fn search<F>(&self, target: &T, mut predicate: F) -> Result<SearchResult>
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.is_empty() {
            return Err(self.empty_error("search"));
        }

        let found = self.iter().any(|element| predicate(target, element));
        Ok(found.into())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the element at the head, or `None` if empty. O(1).
    #[inline]
    pub fn first(&self) -> Option<&T> {
        if self.head.is_none() {
            return None;
        }
        self.storage.get(self.head).map(|node| &node.data)
    }

    /// Returns the element at the tail, or `None` if empty. O(1).
    #[inline]
    pub fn last(&self) -> Option<&T> {
        if self.tail.is_none() {
            return None;
        }
        self.storage.get(self.tail).map(|node| &node.data)
    }

    /// Returns the element `position` steps from the head. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::IndexOutOfBounds`] if `position >= len`.
    pub fn at(&self, position: usize) -> Result<&T> {
        if position >= self.len {
            return Err(self.out_of_bounds(position));
        }

        self.iter()
            .nth(position)
            .ok_or_else(|| self.out_of_bounds(position))
    }

    /// First valid position. Always `0`.
    #[inline]
    pub const fn start_index(&self) -> usize {
        0
    }

    /// One past the last valid position, i.e. the length.
    #[inline]
    pub const fn end_index(&self) -> usize {
        self.len
    }

    /// Returns the position after `i`, saturating at [`end_index`](Self::end_index).
    #[inline]
    pub const fn index_after(&self, i: usize) -> usize {
        if i < self.end_index() { i + 1 } else { i }
    }

    /// Returns an iterator over references to elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter::new(&self.storage, self.head, self.len)
    }

    // ========================================================================
    // Error paths
    // ========================================================================

    fn empty_error(&self, op: &'static str) -> QueueError {
        trace!(op, "operation on empty queue");
        QueueError::Empty { op }
    }

    fn out_of_bounds(&self, index: usize) -> QueueError {
        trace!(index, len = self.len, "index out of bounds");
        QueueError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }
}

// =============================================================================
// Copying operations - build a fresh queue, sources untouched
// =============================================================================

impl<T, S, K: Key> Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K> + Default,
{
    /// Copies the elements at positions `range.start..=range.end` into a new
    /// queue.
    ///
    /// Both bounds are **inclusive**: `slice(0..1)` returns two elements.
    /// A reversed range yields an empty queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::IndexOutOfBounds`] if `range.end >= len`.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_chain::Queue;
    ///
    /// let queue: Queue<u64> = (1..=3).collect();
    /// let slice = queue.slice(0..1).unwrap();
    ///
    /// assert_eq!(slice.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn slice(&self, range: Range<usize>) -> Result<Self>
    where
        T: Clone,
    {
        let Range { start, end } = range;
        if end >= self.len {
            return Err(self.out_of_bounds(end));
        }
        if start > end {
            return Ok(Self::new());
        }

        Ok(self.iter().skip(start).take(end - start + 1).cloned().collect())
    }

    /// Returns a new queue holding copies of `self`'s elements followed by
    /// `rhs`'s. Both sources are left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_chain::Queue;
    ///
    /// let a: Queue<u64> = (1..=2).collect();
    /// let b: Queue<u64> = (3..=4).collect();
    /// let c = a.concat(&b);
    ///
    /// assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// assert_eq!(a.len(), 2);
    /// ```
    pub fn concat(&self, rhs: &Self) -> Self
    where
        T: Clone,
    {
        self.iter().chain(rhs.iter()).cloned().collect()
    }

    /// Returns a new queue holding `f(element)` for each element, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_chain::Queue;
    ///
    /// let queue: Queue<u64> = (1..=3).collect();
    /// let doubled = queue.map(|v| v * 2);
    ///
    /// assert_eq!(doubled.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
    /// assert_eq!(queue.first(), Some(&1));
    /// ```
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        self.iter().map(f).collect()
    }
}

impl<T: Clone, S, K: Key> Clone for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K> + Default,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Concatenation
// =============================================================================

/// `a += &b` appends copies of `b` onto `a`; `b` is unchanged.
impl<T: Clone, S, K: Key> AddAssign<&Queue<T, S, K>> for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn add_assign(&mut self, rhs: &Queue<T, S, K>) {
        self.extend(rhs.iter().cloned());
    }
}

impl<T, S, K: Key> Extend<T> for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T, S, K: Key> FromIterator<T> for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Queues compare equal when they have the same length and the same first
/// element. The remaining elements are not compared.
impl<T: PartialEq, S, K: Key> PartialEq for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.first() == other.first()
    }
}

impl<T: Eq, S, K: Key> Eq for Queue<T, S, K> where S: Storage<Node<T, K>, Key = K> {}

// =============================================================================
// Indexing
// =============================================================================

impl<T, S, K: Key> Index<usize> for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Output = T;

    /// # Panics
    ///
    /// Panics if `position >= len`. Use [`Queue::at`] for a checked lookup.
    fn index(&self, position: usize) -> &Self::Output {
        match self.at(position) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<'a, T, S, K: Key> IntoIterator for &'a Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S, K: Key> IntoIterator for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = T;
    type IntoIter = IntoIter<T, S, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// One element per line, as `[index]: value`.
impl<T: fmt::Display, S, K: Key> fmt::Display for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, element) in self.iter().enumerate() {
            writeln!(f, "[{index}]: {element}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, S, K: Key> fmt::Debug for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
