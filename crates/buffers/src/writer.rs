//! Binary buffer writer with auto-growing capacity.

/// A binary buffer writer that grows automatically as needed.
///
/// The writer can be reused across encode calls: [`Writer::flush`] returns
/// the bytes written since the last flush and rewinds the cursor, keeping
/// the allocation around for the next call.
///
/// # Example
///
/// ```
/// use dbor_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.buf(&[0x02, 0x03]);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
pub struct Writer {
    data: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with a small default capacity.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Ensures at least `capacity` more bytes can be written without
    /// reallocating.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        self.data.reserve(capacity);
    }

    /// Number of bytes written since the last flush.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing has been written since the last flush.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Discards any pending bytes and rewinds the cursor.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Returns the written data and rewinds the cursor, keeping the
    /// underlying allocation.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.data.clone();
        self.data.clear();
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.data.push(val);
    }

    /// Writes a byte slice verbatim.
    #[inline]
    pub fn buf(&mut self, buf: &[u8]) {
        self.data.extend_from_slice(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_returns_written_bytes_and_rewinds() {
        let mut w = Writer::new();
        w.u8(0xaa);
        w.buf(&[0xbb, 0xcc]);
        assert_eq!(w.len(), 3);
        assert_eq!(w.flush(), vec![0xaa, 0xbb, 0xcc]);
        assert!(w.is_empty());
        w.u8(0x01);
        assert_eq!(w.flush(), vec![0x01]);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut w = Writer::with_capacity(2);
        for i in 0..1000u32 {
            w.u8(i as u8);
        }
        let data = w.flush();
        assert_eq!(data.len(), 1000);
        assert_eq!(data[999], 231);
    }

    #[test]
    fn reset_discards_pending_bytes() {
        let mut w = Writer::new();
        w.buf(&[1, 2, 3]);
        w.reset();
        assert_eq!(w.flush(), Vec::<u8>::new());
    }
}
