//! Integer rendering into caller-owned buffers.

use crate::buffer::ByteCursor;
use crate::layout::{Flags, Placement};

use super::digits::{Radix, count_digits, write_digits};
use super::magnitude::Integer;

/// Precomputed rendering of one integer: magnitude, radix and digit count.
///
/// Build one per call; it is cheap to copy and holds no borrowed state.
#[derive(Debug, Clone, Copy)]
pub struct IntRender<T: Integer> {
    magnitude: T::Magnitude,
    digits: usize,
    radix: Radix,
    negative: bool,
}

impl<T: Integer> IntRender<T> {
    pub fn new(value: T, radix: Radix) -> Self {
        let magnitude = value.magnitude();
        Self {
            magnitude,
            digits: count_digits(magnitude, radix),
            radix,
            negative: value.is_negative(),
        }
    }

    #[inline]
    pub fn decimal(value: T) -> Self {
        Self::new(value, Radix::Decimal)
    }

    #[inline]
    pub fn octal(value: T) -> Self {
        Self::new(value, Radix::Octal)
    }

    #[inline]
    pub fn hex(value: T, upper: bool) -> Self {
        Self::new(value, Radix::Hex { upper })
    }

    #[inline]
    pub fn digits(&self) -> usize {
        self.digits
    }

    #[inline]
    pub fn radix(&self) -> Radix {
        self.radix
    }

    #[inline]
    pub fn magnitude(&self) -> T::Magnitude {
        self.magnitude
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Sign plus digits, without padding.
    #[inline]
    pub fn natural_len(&self, show_sign: bool) -> usize {
        self.digits + usize::from(self.negative || show_sign)
    }

    /// Length a layout render with `width` produces.
    #[inline]
    pub fn layout_len(&self, flags: Flags, width: usize) -> usize {
        width.max(self.natural_len(flags.show_sign))
    }

    /// Write the digits at the front of `buf`; returns the position after them.
    #[inline]
    pub fn write_digits(&self, buf: &mut [u8]) -> usize {
        write_digits(self.magnitude, self.radix, &mut buf[..self.digits]);
        self.digits
    }

    fn put_digits(&self, cur: &mut ByteCursor<'_>) {
        let n = self.write_digits(cur.tail());
        cur.advance(n);
    }

    /// Compact render: optional sign, digits, NUL.
    ///
    /// `out` must be longer than [`IntRender::natural_len`]. Returns the
    /// number of bytes written, excluding the terminator.
    pub fn render(&self, show_sign: bool, out: &mut [u8]) -> usize {
        let sign = Flags {
            show_sign,
            ..Flags::NONE
        }
        .sign_byte(self.negative);
        let mut cur = ByteCursor::for_output(out, self.natural_len(show_sign));
        cur.push_opt(sign);
        self.put_digits(&mut cur);
        cur.terminate()
    }

    /// Render within a minimum field `width`.
    ///
    /// Padding is spaces after the digits (`left`), zeros between sign and
    /// digits (`pad_zeros`), or spaces before the sign. `out` must be longer
    /// than [`IntRender::layout_len`]. Returns that length.
    pub fn render_layout(&self, flags: Flags, width: usize, out: &mut [u8]) -> usize {
        let sign = flags.sign_byte(self.negative);
        let natural = self.natural_len(flags.show_sign);
        let mut cur = ByteCursor::for_output(out, width.max(natural));

        match Placement::plan(width, natural, flags) {
            Placement::None => {
                cur.push_opt(sign);
                self.put_digits(&mut cur);
            }
            Placement::Left(pad) => {
                cur.push_opt(sign);
                self.put_digits(&mut cur);
                cur.fill(pad, b' ');
            }
            Placement::Zero(pad) => {
                cur.push_opt(sign);
                cur.fill(pad, b'0');
                self.put_digits(&mut cur);
            }
            Placement::Right(pad) => {
                cur.fill(pad, b' ');
                cur.push_opt(sign);
                self.put_digits(&mut cur);
            }
        }
        cur.terminate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact<T: Integer>(h: IntRender<T>, show_sign: bool) -> String {
        let mut buf = [0u8; 64];
        let n = h.render(show_sign, &mut buf);
        assert_eq!(buf[n], 0, "terminator");
        String::from_utf8(buf[..n].to_vec()).expect("ascii")
    }

    fn layout<T: Integer>(h: IntRender<T>, flags: Flags, width: usize) -> String {
        let mut buf = [0u8; 64];
        let n = h.render_layout(flags, width, &mut buf);
        assert_eq!(n, h.layout_len(flags, width));
        assert_eq!(buf[n], 0, "terminator");
        String::from_utf8(buf[..n].to_vec()).expect("ascii")
    }

    #[test]
    fn compact_scenarios() {
        assert_eq!(compact(IntRender::decimal(0i32), false), "0");
        assert_eq!(compact(IntRender::decimal(-42i32), false), "-42");
        assert_eq!(compact(IntRender::decimal(42i32), true), "+42");
        assert_eq!(compact(IntRender::decimal(0u8), true), "+0");
        assert_eq!(compact(IntRender::hex(255u8, true), false), "FF");
        assert_eq!(compact(IntRender::hex(255u8, false), false), "ff");
        assert_eq!(compact(IntRender::octal(7u32), false), "7");
        assert_eq!(compact(IntRender::octal(8u32), false), "10");
    }

    #[test]
    fn compact_extremes() {
        assert_eq!(
            compact(IntRender::decimal(i64::MIN), false),
            "-9223372036854775808"
        );
        assert_eq!(compact(IntRender::hex(i8::MIN, false), false), "-80");
        assert_eq!(
            compact(IntRender::octal(u64::MAX), false),
            "1777777777777777777777"
        );
    }

    #[test]
    fn helper_keeps_its_inputs() {
        let h = IntRender::hex(i16::MIN, true);
        assert_eq!(h.radix(), Radix::Hex { upper: true });
        assert_eq!(h.magnitude(), 0x8000u16);
        assert!(h.is_negative());
        assert_eq!(h.digits(), 4);

        let h = IntRender::octal(0u64);
        assert_eq!(h.radix(), Radix::Octal);
        assert_eq!(h.magnitude(), 0);
        assert!(!h.is_negative());
    }

    #[test]
    fn natural_len_counts_sign() {
        let h = IntRender::decimal(-5i32);
        assert_eq!(h.natural_len(false), 2);
        let h = IntRender::decimal(5i32);
        assert_eq!(h.natural_len(false), 1);
        assert_eq!(h.natural_len(true), 2);
    }

    #[test]
    fn layout_zero_pad_after_sign() {
        let flags = Flags::NONE.with_zeros();
        assert_eq!(layout(IntRender::decimal(-42i32), flags, 6), "-00042");
        assert_eq!(layout(IntRender::decimal(42i32), flags.with_sign(), 6), "+00042");
        assert_eq!(layout(IntRender::hex(0xABu32, false), flags, 4), "00ab");
    }

    #[test]
    fn layout_left_and_right() {
        assert_eq!(layout(IntRender::decimal(-42i32), Flags::NONE, 6), "   -42");
        assert_eq!(
            layout(IntRender::decimal(-42i32), Flags::NONE.with_left(), 6),
            "-42   "
        );
        assert_eq!(
            layout(IntRender::decimal(42i32), Flags::NONE.with_left().with_zeros(), 5),
            "42   "
        );
    }

    #[test]
    fn layout_width_is_a_minimum() {
        assert_eq!(layout(IntRender::decimal(123u32), Flags::NONE, 2), "123");
        assert_eq!(layout(IntRender::decimal(123u32), Flags::NONE.with_zeros(), 3), "123");
        assert_eq!(layout(IntRender::decimal(-1i8), Flags::NONE, 0), "-1");
    }

    #[test]
    fn layout_exact_fit_buffer() {
        let h = IntRender::decimal(-42i32);
        let mut buf = [0xFFu8; 7];
        assert_eq!(h.render_layout(Flags::NONE.with_zeros(), 6, &mut buf), 6);
        assert_eq!(&buf, b"-00042\0");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "output buffer too small")]
    fn undersized_buffer_is_a_contract_violation() {
        let mut buf = [0u8; 3];
        IntRender::decimal(-42i32).render(false, &mut buf);
    }
}
