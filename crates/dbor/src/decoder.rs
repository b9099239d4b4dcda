//! `Decoder` — recursive-descent parser from DBOR bytes back to a [`Value`].

use dbor_buffers::Reader;

use crate::constants::{
    DEFAULT_MAX_DEPTH, HEADER_BIN, HEADER_NIN, HEADER_SEQ, HEADER_STR, HEADER_UIN, NONE_BYTE,
};
use crate::error::DborError;
use crate::token::read_token;
use crate::value::Value;

/// DBOR conformance level 2 decoder.
///
/// Decoding is strict: the input must contain exactly one value, every
/// declared length must be backed by that many bytes, string payloads must
/// be well-formed UTF-8, decoded integers must lie inside
/// `[−2⁶³, 2⁶⁴−1]` (a header-1 magnitude above `2⁶³ − 1` is a range
/// error, mirroring the positive-overflow check), and sequence nesting
/// deeper than the configured
/// limit is rejected (the wire format lets an attacker declare arbitrary
/// nesting, so the limit bounds stack growth on untrusted input).
///
/// Any failure aborts the whole decode; no partial value is returned.
#[derive(Debug, Clone)]
pub struct Decoder {
    max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a decoder that rejects inputs whose sequence nesting
    /// exceeds `max_depth` levels.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Decode a byte slice into a value, consuming the entire input.
    pub fn decode(&self, input: &[u8]) -> Result<Value, DborError> {
        let mut reader = Reader::new(input);
        let value = self.read_any(&mut reader, self.max_depth)?;
        if reader.remaining() != 0 {
            return Err(DborError::StructuralMismatch);
        }
        Ok(value)
    }

    fn read_any(&self, reader: &mut Reader, depth_left: usize) -> Result<Value, DborError> {
        // 0xff is header 7 with payload 0x1f, reserved for the absent
        // value alone; it never reaches the token decoder.
        let first = reader.peek()?;
        if first == NONE_BYTE {
            reader.skip(1)?;
            return Ok(Value::None);
        }
        // Reserved headers are classified before token decoding, so a
        // reserved byte with an extension-form payload reports as
        // unsupported rather than truncated.
        let header = first >> 5;
        if header > HEADER_SEQ {
            return Err(DborError::UnsupportedHeader(header));
        }
        let (header, magnitude) = read_token(reader)?;
        match header {
            HEADER_UIN => Ok(Value::Integer(magnitude as i128)),
            HEADER_NIN => {
                let v = -(magnitude as i128) - 1;
                // Magnitudes above 2^63 − 1 would decode below −2^63 and
                // violate the value model's integer invariant.
                if !Value::integer_in_range(v) {
                    return Err(DborError::Range);
                }
                Ok(Value::Integer(v))
            }
            HEADER_BIN => {
                let len = payload_len(magnitude)?;
                Ok(Value::Bytes(reader.buf(len)?.to_vec()))
            }
            HEADER_STR => {
                let len = payload_len(magnitude)?;
                Ok(Value::Str(reader.utf8(len)?.to_owned()))
            }
            HEADER_SEQ => {
                if depth_left == 0 {
                    return Err(DborError::DepthLimit);
                }
                let len = payload_len(magnitude)?;
                if reader.remaining() < len {
                    return Err(DborError::Truncated);
                }
                let end = reader.pos() + len;
                let mut elements = Vec::new();
                while reader.pos() < end {
                    elements.push(self.read_any(reader, depth_left - 1)?);
                    if reader.pos() > end {
                        return Err(DborError::StructuralMismatch);
                    }
                }
                Ok(Value::Sequence(elements))
            }
            header => Err(DborError::UnsupportedHeader(header)),
        }
    }
}

/// Converts a declared payload length to `usize`.
///
/// A declared length larger than the address space cannot possibly be
/// backed by input bytes, so it reports as truncation.
#[inline]
fn payload_len(magnitude: u64) -> Result<usize, DborError> {
    usize::try_from(magnitude).map_err(|_| DborError::Truncated)
}
