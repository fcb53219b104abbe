//! `serde` support: a queue serializes as a sequence in FIFO order.

use core::fmt;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Key, Node, Queue, Storage};

impl<T: Serialize, S, K: Key> Serialize for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>, S, K: Key> Deserialize<'de> for Queue<T, S, K>
where
    S: Storage<Node<T, K>, Key = K> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(QueueVisitor(PhantomData))
    }
}

struct QueueVisitor<T, S, K>(PhantomData<fn() -> (T, S, K)>);

impl<'de, T: Deserialize<'de>, S, K: Key> Visitor<'de> for QueueVisitor<T, S, K>
where
    S: Storage<Node<T, K>, Key = K> + Default,
{
    type Value = Queue<T, S, K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of queue elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut queue = Queue::new();
        while let Some(element) = seq.next_element()? {
            queue.add(element);
        }
        Ok(queue)
    }
}
