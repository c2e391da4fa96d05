//! Stack buffers sized for a known worst case.
//!
//! ```ignore
//! let mut buf = RenderBuf::<INT_CAPACITY>::new();
//! assert_eq!(buf.hex(255u8, true), "FF");
//! assert_eq!(buf.decimal(i64::MIN), "-9223372036854775808");
//! ```

use crate::float::FloatSpec;
use crate::int::{Integer, IntRender, Radix};
use crate::layout::Flags;

/// Any primitive integer in any radix without width: `-` plus 43 octal
/// digits of `u128::MAX`, plus NUL.
pub const INT_CAPACITY: usize = 45;

/// Fixed-size buffer holding the most recent rendering.
pub struct RenderBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> RenderBuf<N> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    pub fn int<T: Integer>(&mut self, value: T, radix: Radix) -> &str {
        self.len = IntRender::new(value, radix).render(false, &mut self.buf);
        self.as_str()
    }

    #[inline]
    pub fn decimal<T: Integer>(&mut self, value: T) -> &str {
        self.int(value, Radix::Decimal)
    }

    #[inline]
    pub fn octal<T: Integer>(&mut self, value: T) -> &str {
        self.int(value, Radix::Octal)
    }

    #[inline]
    pub fn hex<T: Integer>(&mut self, value: T, upper: bool) -> &str {
        self.int(value, Radix::Hex { upper })
    }

    /// Integer within a minimum field width. `N` must exceed the width.
    pub fn int_layout<T: Integer>(
        &mut self,
        value: T,
        radix: Radix,
        flags: Flags,
        width: usize,
    ) -> &str {
        self.len = IntRender::new(value, radix).render_layout(flags, width, &mut self.buf);
        self.as_str()
    }

    /// Float per `spec`. `N` must exceed [`FloatSpec::max_len`].
    pub fn float(&mut self, x: f64, spec: &FloatSpec) -> &str {
        self.len = spec.render(x, &mut self.buf);
        self.as_str()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).expect("rendered output is ascii")
    }

    /// Rendered bytes including the NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }
}

impl<const N: usize> Default for RenderBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}
