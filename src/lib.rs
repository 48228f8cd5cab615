//! Codec for a fixed capacity list of profile identifiers stored as a single
//! ERC725Y value.
//!
//! A slot list such as a profile's "Top 6" is written as an ABI style
//! `address[]`: a 32 byte length word followed by one right justified word per
//! element. Two encodings are supported and the caller always picks one:
//!
//! - [`EncodingMode::Positional`] keeps every slot, writing the zero address
//!   for empty ones, so positions survive a round trip.
//! - [`EncodingMode::Compact`] writes occupied slots only.
//!
//! ```rust,ignore
//! let codec = SlotCodec::new(CodecConfig::new(TOP_SIX_CAPACITY)?);
//! let blob = codec.encode(slots.as_slice(), EncodingMode::Positional)?;
//! let blob = codec.update_at_slot(&blob, 1, Some(friend), EncodingMode::Positional)?;
//! let slots = codec.decode(&blob, EncodingMode::Positional)?;
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod identifier;
pub mod slot_list;
pub mod store;

pub use codec::*;
pub use config::*;
pub use error::*;
pub use identifier::*;
pub use slot_list::*;
pub use store::*;
