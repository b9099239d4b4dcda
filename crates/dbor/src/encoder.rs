//! `Encoder` — maps a [`Value`] tree to DBOR bytes.

use dbor_buffers::Writer;

use crate::constants::{
    DEFAULT_MAX_DEPTH, HEADER_BIN, HEADER_NIN, HEADER_SEQ, HEADER_STR, HEADER_UIN, NONE_BYTE,
};
use crate::error::DborError;
use crate::token::{token_len, write_token};
use crate::value::Value;

/// DBOR conformance level 2 encoder.
///
/// Encoding is a pure function of the input value; the writer is reused
/// across calls but carries no value state between them. Sequence framing
/// uses a measuring pass first (the sequence header embeds the total byte
/// length of its encoded children), then a single write pass into a
/// pre-sized buffer, so no intermediate per-subtree buffers are allocated.
pub struct Encoder {
    pub writer: Writer,
    max_depth: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates an encoder that rejects values whose sequence nesting
    /// exceeds `max_depth` levels.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            writer: Writer::new(),
            max_depth,
        }
    }

    /// Encode a value and return the DBOR bytes.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, DborError> {
        self.writer.reset();
        // The measuring pass also front-loads every range and depth check,
        // so nothing is written for a value that would fail partway.
        let size = encoded_len(value, self.max_depth)?;
        self.writer.ensure_capacity(size);
        self.write_any_at(value, self.max_depth)?;
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), DborError> {
        self.write_any_at(value, self.max_depth)
    }

    pub fn write_none(&mut self) {
        self.writer.u8(NONE_BYTE);
    }

    pub fn write_integer(&mut self, v: i128) -> Result<(), DborError> {
        let (header, magnitude) = integer_parts(v)?;
        write_token(&mut self.writer, header, magnitude);
        Ok(())
    }

    pub fn write_bytes(&mut self, b: &[u8]) {
        write_token(&mut self.writer, HEADER_BIN, b.len() as u64);
        self.writer.buf(b);
    }

    pub fn write_str(&mut self, s: &str) {
        write_token(&mut self.writer, HEADER_STR, s.len() as u64);
        self.writer.buf(s.as_bytes());
    }

    pub fn write_sequence(&mut self, elements: &[Value]) -> Result<(), DborError> {
        self.write_sequence_at(elements, self.max_depth)
    }

    fn write_any_at(&mut self, value: &Value, depth_left: usize) -> Result<(), DborError> {
        match value {
            Value::None => {
                self.write_none();
                Ok(())
            }
            Value::Integer(v) => self.write_integer(*v),
            Value::Bytes(b) => {
                self.write_bytes(b);
                Ok(())
            }
            Value::Str(s) => {
                self.write_str(s);
                Ok(())
            }
            Value::Sequence(elements) => self.write_sequence_at(elements, depth_left),
        }
    }

    fn write_sequence_at(&mut self, elements: &[Value], depth_left: usize) -> Result<(), DborError> {
        if depth_left == 0 {
            return Err(DborError::DepthLimit);
        }
        let mut total = 0u64;
        for element in elements {
            total += encoded_len(element, depth_left - 1)? as u64;
        }
        write_token(&mut self.writer, HEADER_SEQ, total);
        for element in elements {
            self.write_any_at(element, depth_left - 1)?;
        }
        Ok(())
    }
}

/// Splits an integer into its wire header and non-negative magnitude.
///
/// Negative values map to `−v − 1`, so `−2⁶³` becomes magnitude `2⁶³ − 1`.
fn integer_parts(v: i128) -> Result<(u8, u64), DborError> {
    if !Value::integer_in_range(v) {
        return Err(DborError::Range);
    }
    if v >= 0 {
        Ok((HEADER_UIN, v as u64))
    } else {
        Ok((HEADER_NIN, (-(v + 1)) as u64))
    }
}

/// Final encoded byte length of a value, validating integer ranges and
/// nesting depth along the way.
fn encoded_len(value: &Value, depth_left: usize) -> Result<usize, DborError> {
    match value {
        Value::None => Ok(1),
        Value::Integer(v) => {
            let (_, magnitude) = integer_parts(*v)?;
            Ok(token_len(magnitude))
        }
        Value::Bytes(b) => Ok(token_len(b.len() as u64) + b.len()),
        Value::Str(s) => Ok(token_len(s.len() as u64) + s.len()),
        Value::Sequence(elements) => {
            if depth_left == 0 {
                return Err(DborError::DepthLimit);
            }
            let mut total = 0usize;
            for element in elements {
                total += encoded_len(element, depth_left - 1)?;
            }
            Ok(token_len(total as u64) + total)
        }
    }
}
