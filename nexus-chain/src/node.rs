//! A single link in the queue's chain.

use crate::Key;

/// A node in the chain.
///
/// Wraps one element with the key of the next node. Users only ever see
/// `&T` through the queue's accessors; the node is an implementation detail
/// exposed so storage backends can be named in type signatures.
#[derive(Debug)]
pub struct Node<T, K: Key = usize> {
    pub(crate) data: T,
    pub(crate) next: K,
}

impl<T, K: Key> Node<T, K> {
    /// Creates a new unlinked node.
    #[inline]
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            next: K::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unlinked() {
        let node: Node<&str> = Node::new("a");
        assert_eq!(node.data, "a");
        assert!(node.next.is_none());
    }
}
