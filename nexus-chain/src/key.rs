//! Key trait for node links.
//!
//! A [`Key`] names a slot in [`Storage`](crate::Storage). Queue nodes link to
//! their successor by key, and the reserved [`Key::NONE`] value stands in for
//! "no next node".

use core::fmt::Debug;

/// Trait for key types used as links between queue nodes.
///
/// # Example
///
/// ```
/// use nexus_chain::Key;
///
/// let key: usize = 7;
/// assert!(key.is_some());
/// assert!(usize::NONE.is_none());
/// ```
///
/// # Custom Key Types
///
/// ```
/// use nexus_chain::Key;
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// struct Slot(u32);
///
/// impl Key for Slot {
///     const NONE: Self = Slot(u32::MAX);
/// }
///
/// assert!(Slot::NONE.is_none());
/// assert!(Slot(0).is_some());
/// ```
pub trait Key: Copy + Eq + Debug {
    /// Sentinel value representing the null link.
    ///
    /// Storage must never hand this value out for an occupied slot.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Key for u32 {
    const NONE: Self = u32::MAX;
}

impl Key for u64 {
    const NONE: Self = u64::MAX;
}

impl Key for usize {
    const NONE: Self = usize::MAX;
}
