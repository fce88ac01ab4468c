//! Checkpoint codec for adapter-private state.
//!
//! Adapters write their bookkeeping with [`StateSerializer::put`] in one
//! fixed order and read it back with [`StateDeserializer::take`] in the
//! identical order. Entries are self-describing `(tag, value)` pairs; the
//! byte form is a JSON array, which keeps a checkpoint inspectable when a
//! round-trip goes wrong.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Accumulates one checkpoint as an ordered sequence of tagged values.
#[derive(Debug, Default)]
pub struct StateSerializer {
    entries: Vec<(String, Value)>,
}

impl StateSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `tag`.
    ///
    /// Panics if `value` cannot be represented; adapter state is plain
    /// scalars and sequences, so hitting this is an adapter bug.
    pub fn put<T: Serialize>(&mut self, tag: &str, value: &T) {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| panic!("unserializable checkpoint field {tag:?}: {e}"));
        self.entries.push((tag.to_owned(), value));
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialized byte form of the checkpoint.
    pub fn into_bytes(self) -> Vec<u8> {
        serde_json::to_vec(&self.entries).expect("tagged JSON values always serialize")
    }
}

/// Replays a checkpoint's tagged values in write order.
#[derive(Debug)]
pub struct StateDeserializer {
    entries: std::vec::IntoIter<(String, Value)>,
}

impl StateDeserializer {
    /// Parse checkpoint bytes produced by [`StateSerializer::into_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let entries: Vec<(String, Value)> = serde_json::from_slice(bytes)?;
        Ok(Self {
            entries: entries.into_iter(),
        })
    }

    /// Consume the next entry, which must carry `tag`.
    ///
    /// Panics if the stream is exhausted or the stored value does not
    /// deserialize as `T`; both mean the adapter's load order diverged from
    /// its save order. Tag equality itself is only checked in debug builds.
    pub fn take<T: DeserializeOwned>(&mut self, tag: &str) -> T {
        let (stored, value) = self
            .entries
            .next()
            .unwrap_or_else(|| panic!("checkpoint exhausted while reading {tag:?}"));
        debug_assert_eq!(stored, tag, "checkpoint read order diverged from write order");
        serde_json::from_value(value)
            .unwrap_or_else(|e| panic!("checkpoint field {tag:?} has the wrong shape: {e}"))
    }

    /// True once every entry has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.entries.len() == 0
    }
}

impl From<StateSerializer> for StateDeserializer {
    /// In-memory handoff, used for clone-by-checkpoint and in tests.
    fn from(ser: StateSerializer) -> Self {
        Self {
            entries: ser.entries.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_in_memory() {
        let mut ser = StateSerializer::new();
        ser.put("score", &1234u32);
        ser.put("terminal", &false);
        ser.put("recent", &vec![0i32, -3, 7]);

        let mut de = StateDeserializer::from(ser);
        assert_eq!(de.take::<u32>("score"), 1234);
        assert!(!de.take::<bool>("terminal"));
        assert_eq!(de.take::<Vec<i32>>("recent"), vec![0, -3, 7]);
        assert!(de.is_exhausted());
    }

    #[test]
    fn test_round_trip_through_bytes() {
        let mut ser = StateSerializer::new();
        ser.put("lives", &3u32);
        ser.put("bounce", &0.25f64);
        let bytes = ser.into_bytes();

        let mut de = StateDeserializer::from_bytes(&bytes).expect("valid checkpoint bytes");
        assert_eq!(de.take::<u32>("lives"), 3);
        assert_eq!(de.take::<f64>("bounce"), 0.25);
        assert!(de.is_exhausted());
    }

    #[test]
    fn test_rejects_garbage_bytes() {
        assert!(StateDeserializer::from_bytes(b"not a checkpoint").is_err());
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_reading_past_the_end_panics() {
        let mut de = StateDeserializer::from(StateSerializer::new());
        let _: u32 = de.take("score");
    }

    #[test]
    fn test_len_tracks_writes() {
        let mut ser = StateSerializer::new();
        assert!(ser.is_empty());
        ser.put("a", &1u8);
        ser.put("b", &2u8);
        assert_eq!(ser.len(), 2);
    }
}
