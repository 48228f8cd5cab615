//! 20 byte profile identifiers.
//!
//! The all-zero value is the empty slot placeholder. It can be constructed so
//! that the encoder is able to see and reject it, but it is never a valid
//! occupant of a slot.

use core::{fmt, str::FromStr};

use alloy_primitives::{Address, B256};

use crate::{require, CodecResult, SlotCodecError};

pub const IDENTIFIER_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(Address);

impl Identifier {
    pub const PLACEHOLDER: Identifier = Identifier(Address::ZERO);

    pub const fn new(address: Address) -> Self {
        Identifier(address)
    }

    pub fn from_slice(bytes: &[u8]) -> CodecResult<Self> {
        require!(
            bytes.len() == IDENTIFIER_LEN,
            SlotCodecError::InvalidIdentifier { index: None }
        );

        Ok(Identifier(Address::from_slice(bytes)))
    }

    /// Parse a mixed case string, rejecting it unless the EIP-55 checksum matches.
    /// All-lowercase and all-uppercase strings carry no checksum and are rejected too.
    pub fn parse_checksummed(s: &str) -> CodecResult<Self> {
        Address::parse_checksummed(s, None)
            .map(Identifier)
            .map_err(|_| SlotCodecError::InvalidIdentifier { index: None })
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == Address::ZERO
    }

    pub fn address(&self) -> Address {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; IDENTIFIER_LEN] {
        &self.0 .0 .0
    }

    /// Right justified 32 byte ABI word
    pub fn to_word(&self) -> B256 {
        self.0.into_word()
    }

    pub fn to_lower_hex(&self) -> String {
        format!("0x{}", hex::encode(self.as_bytes()))
    }

    pub fn to_checksum(&self) -> String {
        self.0.to_checksum(None)
    }
}

impl From<Address> for Identifier {
    fn from(address: Address) -> Self {
        Identifier(address)
    }
}

impl From<[u8; IDENTIFIER_LEN]> for Identifier {
    fn from(bytes: [u8; IDENTIFIER_LEN]) -> Self {
        Identifier(Address::new(bytes))
    }
}

impl From<Identifier> for Address {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

/// Accepts `0x` followed by exactly 40 hex digits in any case. No checksum check.
impl FromStr for Identifier {
    type Err = SlotCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("0x")
            .ok_or(SlotCodecError::InvalidIdentifier { index: None })?;
        require!(
            body.len() == 2 * IDENTIFIER_LEN,
            SlotCodecError::InvalidIdentifier { index: None }
        );

        let mut bytes = [0u8; IDENTIFIER_LEN];
        hex::decode_to_slice(body, &mut bytes)
            .map_err(|_| SlotCodecError::InvalidIdentifier { index: None })?;

        Ok(Identifier::from(bytes))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}
