//! Conversions between `serde_json::Value` and the DBOR value model.
//!
//! Conformance level 2 covers only absence, integers, byte strings, UTF-8
//! text and sequences; JSON booleans, non-integral numbers and objects have
//! no level 2 representation and fail with
//! [`DborError::TypeMismatch`](crate::DborError::TypeMismatch).

use serde_json::{Number, Value as JsonValue};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::DborError;
use crate::value::Value;

/// Convert `serde_json::Value` to a DBOR [`Value`].
pub fn json_to_dbor(v: &JsonValue) -> Result<Value, DborError> {
    match v {
        JsonValue::Null => Ok(Value::None),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i as i128))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Integer(u as i128))
            } else {
                // Non-integral numbers belong to higher conformance levels.
                Err(DborError::TypeMismatch)
            }
        }
        JsonValue::String(s) => Ok(Value::Str(s.clone())),
        JsonValue::Array(items) => {
            let mut elements = Vec::with_capacity(items.len());
            for item in items {
                elements.push(json_to_dbor(item)?);
            }
            Ok(Value::Sequence(elements))
        }
        JsonValue::Bool(_) | JsonValue::Object(_) => Err(DborError::TypeMismatch),
    }
}

/// Convert a DBOR [`Value`] to `serde_json::Value`.
///
/// Byte strings have no JSON form and map to an array of octet numbers.
pub fn dbor_to_json(v: &Value) -> JsonValue {
    match v {
        Value::None => JsonValue::Null,
        Value::Integer(i) => {
            if let Ok(signed) = i64::try_from(*i) {
                JsonValue::Number(Number::from(signed))
            } else {
                // In-range integers above i64::MAX always fit u64.
                JsonValue::Number(Number::from(*i as u64))
            }
        }
        Value::Bytes(bytes) => JsonValue::Array(
            bytes
                .iter()
                .map(|b| JsonValue::Number(Number::from(*b)))
                .collect(),
        ),
        Value::Str(s) => JsonValue::String(s.clone()),
        Value::Sequence(elements) => JsonValue::Array(elements.iter().map(dbor_to_json).collect()),
    }
}

/// Encode a `serde_json::Value` directly to DBOR bytes.
pub fn encode_json(v: &JsonValue) -> Result<Vec<u8>, DborError> {
    let value = json_to_dbor(v)?;
    let mut encoder = Encoder::new();
    encoder.encode(&value)
}

/// Decode DBOR bytes directly to a `serde_json::Value`.
pub fn decode_to_json(bytes: &[u8]) -> Result<JsonValue, DborError> {
    let decoder = Decoder::new();
    Ok(dbor_to_json(&decoder.decode(bytes)?))
}
