// nexus-chain/src/error.rs

//! Error types for queue operations.

use thiserror::Error;

/// Errors returned by [`Queue`](crate::Queue) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The operation requires a non-empty queue.
    #[error("cannot {op}: the queue is empty")]
    Empty {
        /// Name of the operation that was attempted.
        op: &'static str,
    },

    /// A position or range bound was past the last element.
    #[error("index {index} out of bounds for queue of length {len}")]
    IndexOutOfBounds {
        /// The offending position.
        index: usize,
        /// Queue length at the time of the call.
        len: usize,
    },

    /// A search completed without a match.
    ///
    /// [`Queue::search`](crate::Queue::search) reports a miss as
    /// [`SearchResult::NotFound`](crate::SearchResult::NotFound); this error
    /// only appears through [`SearchResult::into_result`](crate::SearchResult::into_result).
    #[error("element not found")]
    ElementNotFound,
}

/// Result type for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
