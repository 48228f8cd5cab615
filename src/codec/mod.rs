//! Slot list <-> blob translation.
//!
//! Wire format is the tail of an ABI encoded `address[]`: a 32 byte big endian
//! length followed by one right justified 32 byte word per element.
//!
//! ```text
//! | length (32) | element 0 (32) | element 1 (32) | ... |
//!                  ^ 12 zero bytes + 20 byte address
//! ```
//!
//! The codec is stateless. Capacity comes from [`CodecConfig`] and the
//! [`EncodingMode`] is passed to every call.

pub mod word;

use alloy_primitives::Bytes;

use crate::{
    require, ChecksumPolicy, CodecConfig, CodecResult, EncodingMode, Identifier, SlotCodecError,
    SlotList,
};
use word::{decode_element, element_word, length_word, read_length, WORD_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCodec {
    config: CodecConfig,
}

impl SlotCodec {
    pub fn new(config: CodecConfig) -> Self {
        SlotCodec { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Parse an identifier string under the configured checksum policy.
    pub fn parse_identifier(&self, s: &str) -> CodecResult<Identifier> {
        match self.config.checksum {
            ChecksumPolicy::Lenient => s.parse(),
            ChecksumPolicy::Strict => Identifier::parse_checksummed(s),
        }
    }

    /// Encode `slots` into a blob.
    ///
    /// # Arguments
    ///
    /// * `slots` - Exactly `capacity` slots. An occupied slot holding the zero
    ///   placeholder is rejected, emptiness must be expressed with `None`.
    /// * `mode` - `Positional` writes `capacity` elements with placeholders for
    ///   empty slots. `Compact` writes only the occupied slots.
    ///
    pub fn encode(&self, slots: &[Option<Identifier>], mode: EncodingMode) -> CodecResult<Bytes> {
        require!(
            slots.len() == self.capacity(),
            SlotCodecError::CapacityMismatch {
                expected: self.capacity(),
                actual: slots.len()
            }
        );

        let mut words = Vec::with_capacity(slots.len());
        for (index, slot) in slots.iter().enumerate() {
            match slot {
                Some(identifier) => {
                    require!(
                        !identifier.is_placeholder(),
                        SlotCodecError::invalid_at(index)
                    );
                    words.push(identifier.to_word());
                }
                None => {
                    if mode == EncodingMode::Positional {
                        words.push(Identifier::PLACEHOLDER.to_word());
                    }
                }
            }
        }

        let mut blob = Vec::with_capacity(WORD_LEN + words.len() * WORD_LEN);
        blob.extend_from_slice(&length_word(words.len()));
        for word in words {
            blob.extend_from_slice(word.as_slice());
        }

        Ok(Bytes::from(blob))
    }

    /// Decode a blob written with the same `mode`.
    ///
    /// The blob is fully validated before any element is interpreted. In
    /// compact mode the identifiers are returned packed at the front of the
    /// list in encoded order, trailing slots empty.
    pub fn decode(&self, blob: &[u8], mode: EncodingMode) -> CodecResult<SlotList> {
        let declared = read_length(blob)?;

        match mode {
            EncodingMode::Positional => require!(
                declared == self.capacity(),
                SlotCodecError::CapacityMismatch {
                    expected: self.capacity(),
                    actual: declared
                }
            ),
            EncodingMode::Compact => require!(
                declared <= self.capacity(),
                SlotCodecError::CapacityMismatch {
                    expected: self.capacity(),
                    actual: declared
                }
            ),
        }

        // Validate padding on every word before producing any output
        let mut elements = Vec::with_capacity(declared);
        for index in 0..declared {
            elements.push(decode_element(&element_word(blob, index), index)?);
        }

        let mut slots = Vec::with_capacity(self.capacity());
        for (index, identifier) in elements.into_iter().enumerate() {
            match (mode, identifier.is_placeholder()) {
                (EncodingMode::Positional, true) => slots.push(None),
                // A compact blob never carries placeholders
                (EncodingMode::Compact, true) => return Err(SlotCodecError::invalid_at(index)),
                (_, false) => slots.push(Some(identifier)),
            }
        }
        slots.resize(self.capacity(), None);

        SlotList::from_slots(self.capacity(), slots)
    }

    /// Replace one slot of an encoded list and re-encode it.
    ///
    /// The whole blob is decoded and validated, the slot is changed on the
    /// decoded list and the full list is encoded again. In compact mode
    /// `index` addresses the packed list returned by [`SlotCodec::decode`] and
    /// the result is re-compacted.
    pub fn update_at_slot(
        &self,
        blob: &[u8],
        index: usize,
        value: Option<Identifier>,
        mode: EncodingMode,
    ) -> CodecResult<Bytes> {
        let mut slots = self.decode(blob, mode)?;
        slots.set(index, value)?;

        self.encode(slots.as_slice(), mode)
    }
}
