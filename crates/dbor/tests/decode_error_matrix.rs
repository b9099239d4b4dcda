//! Decode failure-mode matrix: every malformed input class maps to its
//! dedicated error kind and never to a partial value.

use dbor::{decode, encode, DborError, Decoder, Encoder, Value};

#[test]
fn truncation_cases() {
    // Empty input.
    assert_eq!(decode(&[]), Err(DborError::Truncated));
    // Token announces one extension byte, none follow.
    assert_eq!(decode(&[0x18]), Err(DborError::Truncated));
    // Byte string declares four bytes, two follow.
    assert_eq!(decode(&[0x44, 0x01, 0x02]), Err(DborError::Truncated));
    // Text declares one byte, none follow.
    assert_eq!(decode(&[0x61]), Err(DborError::Truncated));
    // Sequence declares three child bytes, one follows.
    assert_eq!(decode(&[0x83, 0x00]), Err(DborError::Truncated));
}

#[test]
fn invalid_utf8_cases() {
    // Lone continuation byte.
    assert_eq!(decode(&[0x61, 0x80]), Err(DborError::InvalidUtf8));
    // Overlong-style two-byte sequence with a bad continuation.
    assert_eq!(decode(&[0x62, 0xc3, 0x28]), Err(DborError::InvalidUtf8));
    // The same bytes under the byte-string header are fine.
    assert_eq!(
        decode(&[0x42, 0xc3, 0x28]),
        Ok(Value::Bytes(vec![0xc3, 0x28]))
    );
}

#[test]
fn structural_mismatch_cases() {
    // Trailing byte after a complete top-level value.
    assert_eq!(decode(&[0x00, 0x00]), Err(DborError::StructuralMismatch));
    // Child token crosses the sequence's declared end.
    assert_eq!(
        decode(&[0x82, 0x19, 0x00, 0x00]),
        Err(DborError::StructuralMismatch)
    );
}

#[test]
fn unsupported_header_cases() {
    assert_eq!(decode(&[0xa0]), Err(DborError::UnsupportedHeader(5)));
    assert_eq!(decode(&[0xcf]), Err(DborError::UnsupportedHeader(6)));
    assert_eq!(decode(&[0xe0]), Err(DborError::UnsupportedHeader(7)));
    assert_eq!(decode(&[0xfe]), Err(DborError::UnsupportedHeader(7)));
    // Extension-form payloads with no extension bytes still classify by
    // header, not truncation.
    assert_eq!(decode(&[0xbe]), Err(DborError::UnsupportedHeader(5)));
    assert_eq!(decode(&[0xdf]), Err(DborError::UnsupportedHeader(6)));
}

#[test]
fn magnitude_overflow_is_a_range_error() {
    // Eight 0xff extension bytes decode to a magnitude above 2^64 − 1.
    let bytes = [0x1f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
    assert_eq!(decode(&bytes), Err(DborError::Range));
}

#[test]
fn negative_integer_below_min_is_a_range_error() {
    // Header 1 with magnitude 2^63 maps to −2^63 − 1, one past the
    // smallest representable integer.
    let bytes = [0x3f, 0xe8, 0xfe, 0xfe, 0xfe, 0xfe, 0xfe, 0xfe, 0x7e];
    assert_eq!(decode(&bytes), Err(DborError::Range));
}

#[test]
fn default_depth_limit_stops_adversarial_nesting() {
    // 1024 nested sequences is exactly the default limit. The fixture is
    // produced by an encoder with a raised limit so the wire bytes carry
    // the growing length prefixes a real nest needs.
    let mut at_limit = Value::Sequence(vec![]);
    for _ in 1..1024 {
        at_limit = Value::Sequence(vec![at_limit]);
    }
    let mut encoder = Encoder::with_max_depth(2048);
    let ok = encoder.encode(&at_limit).unwrap();
    assert!(decode(&ok).is_ok());

    let too_deep = encoder
        .encode(&Value::Sequence(vec![at_limit]))
        .unwrap();
    assert_eq!(decode(&too_deep), Err(DborError::DepthLimit));
}

#[test]
fn custom_depth_limit_applies_to_both_directions() {
    let mut value = Value::Integer(7);
    for _ in 0..5 {
        value = Value::Sequence(vec![value]);
    }
    let bytes = encode(&value).unwrap();

    assert!(Encoder::with_max_depth(5).encode(&value).is_ok());
    assert_eq!(
        Encoder::with_max_depth(4).encode(&value),
        Err(DborError::DepthLimit)
    );
    assert!(Decoder::with_max_depth(5).decode(&bytes).is_ok());
    assert_eq!(
        Decoder::with_max_depth(4).decode(&bytes),
        Err(DborError::DepthLimit)
    );
}

#[test]
fn errors_abort_without_partial_values() {
    // A valid prefix followed by garbage must not surface the prefix.
    let mut bytes = encode(&Value::Str("ok".into())).unwrap();
    bytes.push(0xa0);
    assert_eq!(decode(&bytes), Err(DborError::StructuralMismatch));
}
