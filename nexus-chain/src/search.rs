//! Outcome of a linear search.

use core::fmt;

use crate::{QueueError, Result};

/// Result of [`Queue::search`](crate::Queue::search).
///
/// A miss is a normal outcome, not an error. Use [`into_result`](Self::into_result)
/// when a miss should propagate with `?`.
///
/// # Example
///
/// ```
/// use nexus_chain::{Queue, QueueError, SearchResult};
///
/// let mut queue: Queue<u32> = Queue::new();
/// queue.add(4);
///
/// let hit = queue.search(&4, |a, b| a == b).unwrap();
/// assert_eq!(hit, SearchResult::Found);
///
/// let miss = queue.search(&5, |a, b| a == b).unwrap();
/// assert_eq!(miss.into_result(), Err(QueueError::ElementNotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// The predicate matched at least one element.
    Found,
    /// The scan finished without a match.
    NotFound,
}

impl SearchResult {
    /// Returns `true` for [`SearchResult::Found`].
    #[inline]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found)
    }

    /// Converts a miss into [`QueueError::ElementNotFound`].
    #[inline]
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Found => Ok(()),
            Self::NotFound => Err(QueueError::ElementNotFound),
        }
    }
}

impl From<bool> for SearchResult {
    #[inline]
    fn from(found: bool) -> Self {
        if found { Self::Found } else { Self::NotFound }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found => f.write_str("ElementFound"),
            Self::NotFound => f.write_str("ElementNotFound"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(SearchResult::Found.to_string(), "ElementFound");
        assert_eq!(SearchResult::NotFound.to_string(), "ElementNotFound");
    }

    #[test]
    fn into_result() {
        assert_eq!(SearchResult::Found.into_result(), Ok(()));
        assert_eq!(
            SearchResult::NotFound.into_result(),
            Err(QueueError::ElementNotFound)
        );
    }

    #[test]
    fn from_bool() {
        assert!(SearchResult::from(true).is_found());
        assert!(!SearchResult::from(false).is_found());
    }
}
