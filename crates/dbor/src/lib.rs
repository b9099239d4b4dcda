//! DBOR (Dense Binary Object Representation) conformance level 2 codec.
//!
//! Level 2 covers five value kinds — the absent value, integers in
//! `[−2⁶³, 2⁶⁴−1]`, byte strings, UTF-8 text and nested sequences — and
//! encodes each value to exactly one byte sequence. Every token starts with
//! a byte packing a 3-bit header and a 5-bit payload; magnitudes too large
//! for the payload continue in up to eight little-endian bijective
//! base-256 extension bytes, which is what makes the format canonical
//! without padding rules.
//!
//! # Example
//!
//! ```
//! use dbor::{decode, encode, Value};
//!
//! let value = Value::Sequence(vec![
//!     Value::Integer(1),
//!     Value::Str("hi".into()),
//!     Value::None,
//! ]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

pub mod constants;
mod convert;
mod decoder;
mod encoder;
mod error;
mod shared;
mod token;
mod value;

pub use convert::{decode_to_json, dbor_to_json, encode_json, json_to_dbor};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::DborError;
pub use shared::{decode, encode};
pub use token::{read_token, token_len, write_token};
pub use value::{Value, INTEGER_MAX, INTEGER_MIN};
