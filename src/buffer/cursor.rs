use std::fmt;

/// Forward write cursor over a caller-owned byte buffer.
///
/// Capacity is validated once by the renderer that creates the cursor; the
/// individual writes rely on slice indexing. The last byte written by
/// [`ByteCursor::terminate`] is a NUL that is not counted in the length.
pub struct ByteCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Cursor for an output of `len` bytes plus terminator.
    ///
    /// A buffer that cannot hold both is a caller bug.
    #[inline]
    pub fn for_output(buf: &'a mut [u8], len: usize) -> Self {
        debug_assert!(
            buf.len() > len,
            "output buffer too small: capacity {} for {} bytes plus terminator",
            buf.len(),
            len
        );
        Self::new(buf)
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    #[inline]
    pub fn push_opt(&mut self, byte: Option<u8>) {
        if let Some(byte) = byte {
            self.push(byte);
        }
    }

    #[inline]
    pub fn fill(&mut self, n: usize, byte: u8) {
        self.pos += crate::layout::fill(&mut self.buf[self.pos..], n, byte);
    }

    /// Unwritten region, for writers that report how much they used.
    #[inline]
    pub fn tail(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos..]
    }

    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Move `from..position` right by `by` bytes and advance past it.
    ///
    /// The gap `from..from + by` keeps its old contents; callers fill it.
    pub fn shift_right(&mut self, from: usize, by: usize) {
        self.buf.copy_within(from..self.pos, from + by);
        self.pos += by;
    }

    /// Overwrite `n` bytes starting at `at` (behind the cursor) with `byte`.
    pub fn fill_at(&mut self, at: usize, n: usize, byte: u8) {
        crate::layout::fill(&mut self.buf[at..], n, byte);
    }

    /// Write the NUL terminator and return the output length.
    #[inline]
    pub fn terminate(self) -> usize {
        self.buf[self.pos] = 0;
        self.pos
    }
}

impl fmt::Write for ByteCursor<'_> {
    /// Appends `s`, keeping one byte free for the terminator.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if bytes.len() >= self.remaining() {
            return Err(fmt::Error);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ByteCursor;
    use std::fmt::Write;

    #[test]
    fn pushes_and_terminates() {
        let mut buf = [0xFFu8; 8];
        let mut cur = ByteCursor::for_output(&mut buf, 4);
        cur.push(b'-');
        cur.push_opt(None);
        cur.fill(2, b'0');
        cur.push(b'7');
        assert_eq!(cur.terminate(), 4);
        assert_eq!(&buf[..5], b"-007\0");
    }

    #[test]
    fn shift_right_opens_a_gap() {
        let mut buf = [0u8; 8];
        let mut cur = ByteCursor::new(&mut buf);
        cur.push(b'a');
        cur.push(b'b');
        cur.shift_right(0, 3);
        cur.fill_at(0, 3, b' ');
        assert_eq!(cur.terminate(), 5);
        assert_eq!(&buf[..5], b"   ab");
    }

    #[test]
    fn fmt_write_reserves_terminator() {
        let mut buf = [0u8; 4];
        let mut cur = ByteCursor::new(&mut buf);
        assert!(write!(cur, "abc").is_ok());
        assert!(write!(cur, "d").is_err());
        assert_eq!(cur.terminate(), 3);
    }
}
