//! Bounds-checked binary buffer reader with cursor tracking.

use std::str;

use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// Every read is bounds-checked and returns [`BufferError::EndOfBuffer`]
/// rather than panicking when the buffer is exhausted, so decoders can
/// surface truncation to their callers.
///
/// # Example
///
/// ```
/// use dbor_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), Ok(0x01));
/// assert_eq!(reader.buf(2), Ok(&[0x02, 0x03][..]));
/// assert!(reader.u8().is_err());
/// ```
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying slice.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying slice is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of remaining bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.remaining() < n {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Peeks at the current byte without advancing the cursor.
    #[inline]
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.check(1)?;
        Ok(self.data[self.pos])
    }

    /// Advances the cursor by the given number of bytes.
    #[inline]
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.check(length)?;
        self.pos += length;
        Ok(())
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    /// Returns a subslice of the given size and advances the cursor.
    #[inline]
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let bin = &self.data[self.pos..self.pos + size];
        self.pos += size;
        Ok(bin)
    }

    /// Reads `size` bytes and validates them as UTF-8.
    #[inline]
    pub fn utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        self.check(size)?;
        let s = str::from_utf8(&self.data[self.pos..self.pos + size])
            .map_err(|_| BufferError::InvalidUtf8)?;
        self.pos += size;
        Ok(s)
    }
}
