//! Shared convenience wrappers for DBOR encode/decode.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::DborError;
use crate::value::Value;

/// Encode a [`Value`] into DBOR bytes with the default settings.
pub fn encode(value: &Value) -> Result<Vec<u8>, DborError> {
    let mut encoder = Encoder::new();
    encoder.encode(value)
}

/// Decode DBOR bytes into a [`Value`] with the default settings.
pub fn decode(bytes: &[u8]) -> Result<Value, DborError> {
    let decoder = Decoder::new();
    decoder.decode(bytes)
}
