//! 32 byte ABI words.
//!
//! A blob is a length word followed by one word per element. Addresses sit in
//! the low 20 bytes of their word, the upper 12 bytes are zero.

use alloy_primitives::{B256, U256};

use crate::{require, CodecResult, Identifier, MalformedReason, SlotCodecError};

pub const WORD_LEN: usize = 32;

/// Bytes of zero padding ahead of an address in its word
pub const PADDING_LEN: usize = WORD_LEN - crate::IDENTIFIER_LEN;

pub fn length_word(len: usize) -> [u8; WORD_LEN] {
    U256::from(len).to_be_bytes::<WORD_LEN>()
}

/// Read the declared element count and check it against the blob size.
pub fn read_length(blob: &[u8]) -> CodecResult<usize> {
    require!(
        blob.len() >= WORD_LEN,
        SlotCodecError::MalformedBlob(MalformedReason::Truncated { len: blob.len() })
    );

    let declared = U256::from_be_slice(&blob[..WORD_LEN]);
    let declared = usize::try_from(declared)
        .map_err(|_| SlotCodecError::MalformedBlob(MalformedReason::LengthOverflow))?;

    let expected = declared
        .checked_mul(WORD_LEN)
        .and_then(|body| body.checked_add(WORD_LEN))
        .ok_or(SlotCodecError::MalformedBlob(MalformedReason::LengthOverflow))?;
    require!(
        expected == blob.len(),
        SlotCodecError::MalformedBlob(MalformedReason::LengthMismatch {
            declared,
            actual: blob.len()
        })
    );

    Ok(declared)
}

/// Element word `index`. Caller must have validated the blob with `read_length`.
pub fn element_word(blob: &[u8], index: usize) -> B256 {
    let start = WORD_LEN + index * WORD_LEN;
    B256::from_slice(&blob[start..start + WORD_LEN])
}

/// Decode an element word, rejecting dirty padding. The zero word decodes to
/// the placeholder, callers decide what it means.
pub fn decode_element(word: &B256, index: usize) -> CodecResult<Identifier> {
    require!(
        word[..PADDING_LEN].iter().all(|byte| *byte == 0),
        SlotCodecError::MalformedBlob(MalformedReason::DirtyPadding { index })
    );

    Identifier::from_slice(&word[PADDING_LEN..])
}
