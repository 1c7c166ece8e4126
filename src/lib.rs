//! Resilient JSON decoding with per-field default fallback.
//!
//! A record type opts in with `#[derive(ResilientCodable)]` and declares a
//! default value for each field. The generated decoder tolerates missing or
//! malformed individual fields by keeping the declared default instead of
//! failing the whole decode; only a payload that cannot produce a keyed
//! container at all fails.

pub mod decode;
pub mod error;

// Re-export the most common types for easier use
// Runtime interface
pub use decode::{Codable, Decoder, JsonDecoder, KeyedContainer, ResilientDecode};
pub use decode::{from_json_slice, from_json_str, to_json_string};
pub use error::{DecodeError, Result};

// Derive macro
pub use resilient_codable_macros::ResilientCodable;
