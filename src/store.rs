//! Key/value storage seam. Emulates an ERC725Y store with a HashMap for tests
//! and local use.
//!
//! Keys are opaque. Nothing here derives or interprets them.

use std::collections::HashMap;

use alloy_primitives::{Bytes, B256};
use tracing::{debug, warn};

use crate::{CodecResult, EncodingMode, Identifier, SlotCodec, SlotList};

pub type DataKey = B256;

pub trait DataStore {
    /// `None` if the key was never written
    fn get_data(&self, key: &DataKey) -> Option<Bytes>;

    fn set_data(&mut self, key: DataKey, value: Bytes);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: HashMap<DataKey, Bytes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl DataStore for MemoryStore {
    fn get_data(&self, key: &DataKey) -> Option<Bytes> {
        self.inner.get(key).cloned()
    }

    fn set_data(&mut self, key: DataKey, value: Bytes) {
        self.inner.insert(key, value);
    }
}

/// Read and decode the slot list stored at `key`.
///
/// Returns `Ok(None)` for a key that was never written. A stored value that
/// fails to decode is an error, it is never replaced by an empty list.
pub fn load_slots<S: DataStore>(
    store: &S,
    key: &DataKey,
    codec: &SlotCodec,
    mode: EncodingMode,
) -> CodecResult<Option<SlotList>> {
    let Some(blob) = store.get_data(key) else {
        debug!(%key, "no value stored");
        return Ok(None);
    };

    match codec.decode(&blob, mode) {
        Ok(slots) => {
            debug!(%key, occupied = slots.occupied().count(), ?mode, "loaded slots");
            Ok(Some(slots))
        }
        Err(error) => {
            warn!(%key, %error, len = blob.len(), "stored value failed to decode");
            Err(error)
        }
    }
}

pub fn save_slots<S: DataStore>(
    store: &mut S,
    key: DataKey,
    codec: &SlotCodec,
    slots: &[Option<Identifier>],
    mode: EncodingMode,
) -> CodecResult<()> {
    let blob = codec.encode(slots, mode)?;
    debug!(%key, len = blob.len(), ?mode, "saving slots");
    store.set_data(key, blob);

    Ok(())
}

/// Change one slot of the list stored at `key`.
///
/// Returns `Ok(false)` without writing if nothing is stored at `key`.
pub fn update_stored_slot<S: DataStore>(
    store: &mut S,
    key: DataKey,
    codec: &SlotCodec,
    index: usize,
    value: Option<Identifier>,
    mode: EncodingMode,
) -> CodecResult<bool> {
    let Some(blob) = store.get_data(&key) else {
        debug!(%key, index, "no value stored, skipping update");
        return Ok(false);
    };

    let updated = codec.update_at_slot(&blob, index, value, mode)?;
    debug!(%key, index, cleared = value.is_none(), "updated slot");
    store.set_data(key, updated);

    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{CodecConfig, MalformedReason, SlotCodecError, TOP_SIX_CAPACITY};

    fn id(byte: u8) -> Identifier {
        Identifier::from([byte; 20])
    }

    fn top_six() -> SlotCodec {
        SlotCodec::new(CodecConfig::new(TOP_SIX_CAPACITY).unwrap())
    }

    #[test]
    fn test_write_and_read() {
        let mut store = MemoryStore::new();
        let codec = top_six();
        let key = B256::repeat_byte(0x11);

        assert_eq!(
            load_slots(&store, &key, &codec, EncodingMode::Positional),
            Ok(None)
        );

        let mut slots = SlotList::empty(TOP_SIX_CAPACITY);
        slots.add(id(1)).unwrap();
        slots.set(4, Some(id(2))).unwrap();
        save_slots(
            &mut store,
            key,
            &codec,
            slots.as_slice(),
            EncodingMode::Positional,
        )
        .unwrap();

        assert_eq!(
            load_slots(&store, &key, &codec, EncodingMode::Positional),
            Ok(Some(slots))
        );
    }

    #[test]
    fn test_load_malformed_is_error() {
        let mut store = MemoryStore::new();
        let key = B256::repeat_byte(0x22);

        // Empty value is not an empty list
        store.set_data(key, Bytes::new());

        assert_eq!(
            load_slots(&store, &key, &top_six(), EncodingMode::Compact),
            Err(SlotCodecError::MalformedBlob(MalformedReason::Truncated {
                len: 0
            }))
        );
    }

    #[test]
    fn test_update_stored_slot() {
        let mut store = MemoryStore::new();
        let codec = top_six();
        let key = B256::repeat_byte(0x33);

        assert_eq!(
            update_stored_slot(
                &mut store,
                key,
                &codec,
                0,
                Some(id(1)),
                EncodingMode::Positional
            ),
            Ok(false)
        );
        assert!(store.get_data(&key).is_none());

        save_slots(
            &mut store,
            key,
            &codec,
            &[Some(id(1)), None, Some(id(2)), None, None, None],
            EncodingMode::Positional,
        )
        .unwrap();

        assert_eq!(
            update_stored_slot(&mut store, key, &codec, 2, None, EncodingMode::Positional),
            Ok(true)
        );
        let loaded = load_slots(&store, &key, &codec, EncodingMode::Positional)
            .unwrap()
            .unwrap();
        assert_eq!(loaded.as_slice(), &[Some(id(1)), None, None, None, None, None]);
    }

    #[test]
    fn test_failed_save_leaves_store_untouched() {
        let mut store = MemoryStore::new();
        let key = B256::repeat_byte(0x44);

        let result = save_slots(
            &mut store,
            key,
            &top_six(),
            &[Some(id(1))],
            EncodingMode::Compact,
        );

        assert_eq!(
            result,
            Err(SlotCodecError::CapacityMismatch {
                expected: 6,
                actual: 1
            })
        );
        assert!(store.get_data(&key).is_none());
    }
}
