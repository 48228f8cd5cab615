use alloy_primitives::U256;
use alloy_sol_types::{sol, SolError};

sol! {
    // Identifier is not 20 bytes, is not hex, fails its checksum or is the zero placeholder
    error InvalidIdentifier(uint256 index);

    // Slot list length or decoded array length does not match the configured capacity
    error CapacityMismatch(uint256 expected, uint256 actual);

    // Slot index is outside [0, capacity)
    error IndexOutOfRange(uint256 index, uint256 capacity);

    // Blob failed structural validation. Reason codes match MalformedReason
    error MalformedBlob(uint8 reason);

    // No empty slot left to place an identifier in
    error SlotListFull(uint256 capacity);

    // Identifier already occupies a slot
    error DuplicateIdentifier(uint256 index);
}

/// Why a blob was rejected by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Shorter than the 32 byte length word.
    Truncated { len: usize },

    /// `32 + 32 * declared` does not equal the blob length.
    LengthMismatch { declared: usize, actual: usize },

    /// Declared length does not fit in a `usize`.
    LengthOverflow,

    /// Element word has a nonzero byte in its upper 12 bytes.
    DirtyPadding { index: usize },
}

impl MalformedReason {
    pub fn code(&self) -> u8 {
        match self {
            MalformedReason::Truncated { .. } => 0,
            MalformedReason::LengthMismatch { .. } => 1,
            MalformedReason::LengthOverflow => 2,
            MalformedReason::DirtyPadding { .. } => 3,
        }
    }
}

impl core::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MalformedReason::Truncated { len } => {
                write!(f, "blob of {len} bytes is missing its length word")
            }
            MalformedReason::LengthMismatch { declared, actual } => write!(
                f,
                "declared {declared} elements but blob holds {actual} bytes"
            ),
            MalformedReason::LengthOverflow => write!(f, "declared length overflows usize"),
            MalformedReason::DirtyPadding { index } => {
                write!(f, "element {index} has nonzero padding bytes")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotCodecError {
    /// `index` is the slot position, or `None` when parsing a standalone value.
    #[error("invalid identifier{}", .index.map(|i| format!(" at slot {i}")).unwrap_or_default())]
    InvalidIdentifier { index: Option<usize> },

    #[error("expected {expected} slots, got {actual}")]
    CapacityMismatch { expected: usize, actual: usize },

    #[error("slot index {index} out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("malformed blob: {0}")]
    MalformedBlob(MalformedReason),

    #[error("all {capacity} slots are occupied")]
    SlotListFull { capacity: usize },

    #[error("identifier already present at slot {index}")]
    DuplicateIdentifier { index: usize },
}

impl SlotCodecError {
    pub fn invalid_at(index: usize) -> Self {
        SlotCodecError::InvalidIdentifier { index: Some(index) }
    }
}

/// ABI encoded revert payload, selector first.
impl From<SlotCodecError> for Vec<u8> {
    fn from(error: SlotCodecError) -> Vec<u8> {
        match error {
            SlotCodecError::InvalidIdentifier { index } => InvalidIdentifier {
                // Standalone parse failures have no slot. Report the max value
                index: index.map(U256::from).unwrap_or(U256::MAX),
            }
            .abi_encode(),
            SlotCodecError::CapacityMismatch { expected, actual } => CapacityMismatch {
                expected: U256::from(expected),
                actual: U256::from(actual),
            }
            .abi_encode(),
            SlotCodecError::IndexOutOfRange { index, capacity } => IndexOutOfRange {
                index: U256::from(index),
                capacity: U256::from(capacity),
            }
            .abi_encode(),
            SlotCodecError::MalformedBlob(reason) => MalformedBlob {
                reason: reason.code(),
            }
            .abi_encode(),
            SlotCodecError::SlotListFull { capacity } => SlotListFull {
                capacity: U256::from(capacity),
            }
            .abi_encode(),
            SlotCodecError::DuplicateIdentifier { index } => DuplicateIdentifier {
                index: U256::from(index),
            }
            .abi_encode(),
        }
    }
}

pub type CodecResult<T, E = SlotCodecError> = core::result::Result<T, E>;

#[macro_export]
macro_rules! require {
    ($invariant:expr, $error:expr) => {
        if !$invariant {
            return Err($error);
        }
    };
}
