//! Integer token codec: the self-delimiting (header, magnitude) byte runs
//! every other DBOR encoding is built on.
//!
//! A token's first byte packs a 3-bit header and a 5-bit payload. Magnitudes
//! up to [`DIRECT_MAX`] live in the payload directly; larger magnitudes store
//! `DIRECT_MAX + L` in the payload followed by `L` little-endian extension
//! bytes holding the residual `magnitude − 24` in bijective base 256 (each
//! stored byte `b` is the digit `b + 1`). Bijective numerals have no zero
//! digit, so every magnitude has exactly one minimal-length encoding.

use dbor_buffers::{Reader, Writer};

use crate::constants::{DIRECT_MAX, EXT_MAX_BYTES, PAYLOAD_MASK};
use crate::error::DborError;

/// Number of bytes `write_token` emits for the given magnitude.
pub fn token_len(magnitude: u64) -> usize {
    if magnitude <= DIRECT_MAX as u64 {
        return 1;
    }
    let mut v = magnitude - DIRECT_MAX as u64;
    let mut ext = 0;
    while v > 0 {
        v = (v - 1) >> 8;
        ext += 1;
    }
    1 + ext
}

/// Writes a token with the given header and magnitude.
///
/// Any `u64` magnitude fits in at most [`EXT_MAX_BYTES`] extension bytes,
/// so this cannot fail.
pub fn write_token(writer: &mut Writer, header: u8, magnitude: u64) {
    let overlay = header << 5;
    if magnitude <= DIRECT_MAX as u64 {
        writer.u8(overlay | magnitude as u8);
        return;
    }
    let mut digits = [0u8; EXT_MAX_BYTES];
    let mut ext = 0;
    let mut v = magnitude - DIRECT_MAX as u64;
    while v > 0 {
        v -= 1;
        digits[ext] = (v & 0xff) as u8;
        v >>= 8;
        ext += 1;
    }
    writer.u8(overlay | (DIRECT_MAX + ext as u8));
    writer.buf(&digits[..ext]);
}

/// Reads one token, returning its header and magnitude.
///
/// Consumes exactly one byte for the direct form, `1 + L` bytes otherwise.
/// Fails with [`DborError::Truncated`] if fewer than `L` extension bytes
/// remain and with [`DborError::Range`] if the decoded magnitude exceeds
/// `u64::MAX`.
pub fn read_token(reader: &mut Reader) -> Result<(u8, u64), DborError> {
    let first = reader.u8()?;
    let header = first >> 5;
    let payload = first & PAYLOAD_MASK;
    if payload <= DIRECT_MAX {
        return Ok((header, payload as u64));
    }
    // The 5-bit payload caps the extension length at 8, so only truncation
    // and magnitude overflow are reachable here.
    let ext = (payload - DIRECT_MAX) as usize;
    let bytes = reader.buf(ext)?;
    let mut magnitude = DIRECT_MAX as u128;
    for (i, b) in bytes.iter().enumerate() {
        magnitude += (*b as u128 + 1) << (8 * i);
    }
    let magnitude = u64::try_from(magnitude).map_err(|_| DborError::Range)?;
    Ok((header, magnitude))
}
