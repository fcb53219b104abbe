//! Storage trait for the slot arena that owns queue nodes.
//!
//! Storage provides insert/remove/get operations where keys remain valid
//! until explicitly removed. The queue links nodes by key instead of by
//! pointer, so the arena is the only owner of every node and a dropped
//! queue drops its whole chain with it.

use crate::Key;

/// Slab-like storage with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **Never `NONE`**: [`Key::NONE`] is never returned from [`insert`](Storage::insert)
/// - **Growable**: insertion always succeeds
///
/// # Implementations
///
/// - `slab::Slab<T>` - the default backend, `usize` keys
///
/// # Example
///
/// ```
/// use nexus_chain::Storage;
///
/// let mut storage: slab::Slab<&str> = slab::Slab::new();
/// let key = Storage::insert(&mut storage, "hello");
/// assert_eq!(Storage::get(&storage, key), Some(&"hello"));
/// assert_eq!(Storage::remove(&mut storage, key), Some("hello"));
/// assert_eq!(Storage::len(&storage), 0);
/// ```
pub trait Storage<T> {
    /// Key type handed out by this storage.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value.
    fn clear(&mut self);
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> Self::Key {
        self.insert(value)
    }

    #[inline]
    fn remove(&mut self, key: Self::Key) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: Self::Key) -> Option<&T> {
        self.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T> {
        self.get_mut(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab<T>() -> slab::Slab<T> {
        slab::Slab::new()
    }

    #[test]
    fn insert_get_remove() {
        let mut storage = slab();

        let a = Storage::insert(&mut storage, 10u64);
        let b = Storage::insert(&mut storage, 20u64);

        assert_ne!(a, b);
        assert_eq!(Storage::len(&storage), 2);
        assert_eq!(Storage::get(&storage, a), Some(&10));
        assert_eq!(Storage::get(&storage, b), Some(&20));

        assert_eq!(Storage::remove(&mut storage, a), Some(10));
        assert_eq!(Storage::get(&storage, a), None);
        assert_eq!(Storage::len(&storage), 1);
    }

    #[test]
    fn remove_twice_returns_none() {
        let mut storage = slab();

        let a = Storage::insert(&mut storage, 1u32);
        assert_eq!(Storage::remove(&mut storage, a), Some(1));
        assert_eq!(Storage::remove(&mut storage, a), None);
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut storage = slab();

        let a = Storage::insert(&mut storage, 1u32);
        Storage::remove(&mut storage, a);
        let b = Storage::insert(&mut storage, 2u32);

        assert_eq!(a, b);
        assert_eq!(Storage::get(&storage, b), Some(&2));
    }

    #[test]
    fn get_mut_writes_through() {
        let mut storage = slab();

        let a = Storage::insert(&mut storage, 1u32);
        *Storage::get_mut(&mut storage, a).unwrap() = 5;
        assert_eq!(Storage::get(&storage, a), Some(&5));
    }

    #[test]
    fn clear_empties_storage() {
        let mut storage = slab();

        for i in 0..8u32 {
            Storage::insert(&mut storage, i);
        }
        assert!(!Storage::is_empty(&storage));

        Storage::clear(&mut storage);
        assert!(Storage::is_empty(&storage));
    }

    #[test]
    fn never_hands_out_none() {
        let mut storage = slab();

        for i in 0..64u32 {
            let key = Storage::insert(&mut storage, i);
            assert!(key.is_some());
        }
    }
}
