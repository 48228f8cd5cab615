use crate::{require, CodecResult, SlotCodecError};

/// Capacity of the profile "Top 6" list.
pub const TOP_SIX_CAPACITY: usize = 6;

/// Capacity used by the extended list view.
pub const EXTENDED_CAPACITY: usize = 10;

/// How empty slots are represented on the wire. Chosen by the caller for every
/// operation and never inferred from the blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// Only occupied slots are written, in slot order. Positions are lost.
    Compact,

    /// Every slot is written. Empty slots become the zero placeholder, so the
    /// array length always equals the capacity.
    Positional,
}

/// Checksum handling when identifiers are parsed from strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumPolicy {
    Lenient,
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    pub capacity: usize,
    pub checksum: ChecksumPolicy,
}

impl CodecConfig {
    pub fn new(capacity: usize) -> CodecResult<Self> {
        require!(
            capacity > 0,
            SlotCodecError::CapacityMismatch {
                expected: 1,
                actual: 0
            }
        );

        Ok(CodecConfig {
            capacity,
            checksum: ChecksumPolicy::Lenient,
        })
    }

    pub fn with_checksum(mut self, checksum: ChecksumPolicy) -> Self {
        self.checksum = checksum;
        self
    }
}
