//! Wire-format constants for DBOR conformance level 2.

// Header values (bits 7-5 of a token's first byte)
pub const HEADER_UIN: u8 = 0b000;
pub const HEADER_NIN: u8 = 0b001;
pub const HEADER_BIN: u8 = 0b010;
pub const HEADER_STR: u8 = 0b011;
pub const HEADER_SEQ: u8 = 0b100;

/// Mask for the 5-bit payload field of a token's first byte.
pub const PAYLOAD_MASK: u8 = 0b11111;

/// Largest magnitude encodable directly in the 5-bit payload.
pub const DIRECT_MAX: u8 = 23;

/// Maximum number of little-endian extension bytes following a token.
pub const EXT_MAX_BYTES: usize = 8;

/// The single-byte encoding of the absent value (header 7, payload 0x1F).
pub const NONE_BYTE: u8 = 0xff;

/// Default maximum sequence nesting depth for both encode and decode.
pub const DEFAULT_MAX_DEPTH: usize = 1024;
