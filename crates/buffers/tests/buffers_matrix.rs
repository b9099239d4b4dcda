//! Writer/Reader roundtrip matrix for the buffers crate.

use dbor_buffers::{BufferError, Reader, Writer};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0x7f);
    w.u8(0xff);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0x00));
    assert_eq!(r.u8(), Ok(0x7f));
    assert_eq!(r.u8(), Ok(0xff));
    assert_eq!(r.u8(), Err(BufferError::EndOfBuffer));
}

#[test]
fn roundtrip_buf() {
    let mut w = Writer::new();
    w.buf(b"");
    w.buf(b"abc");
    w.buf(&[0x00, 0xff]);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.buf(3), Ok(&b"abc"[..]));
    assert_eq!(r.buf(2), Ok(&[0x00, 0xff][..]));
    assert_eq!(r.remaining(), 0);
}

#[test]
fn roundtrip_utf8() {
    let mut w = Writer::new();
    w.buf("héllo".as_bytes());
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.utf8(6), Ok("héllo"));
}

#[test]
fn writer_reuse_across_flushes() {
    let mut w = Writer::new();
    w.u8(1);
    assert_eq!(w.flush(), vec![1]);
    w.u8(2);
    w.u8(3);
    assert_eq!(w.flush(), vec![2, 3]);
}

#[test]
fn reader_skip_and_bounds() {
    let data = [1, 2, 3, 4];
    let mut r = Reader::new(&data);
    assert_eq!(r.skip(2), Ok(()));
    assert_eq!(r.pos(), 2);
    assert_eq!(r.skip(3), Err(BufferError::EndOfBuffer));
    assert_eq!(r.pos(), 2);
    assert_eq!(r.buf(2), Ok(&[3, 4][..]));
}

#[test]
fn reader_invalid_utf8_reports_kind() {
    let data = [0xc3, 0x28];
    let mut r = Reader::new(&data);
    assert_eq!(r.utf8(2), Err(BufferError::InvalidUtf8));
}
