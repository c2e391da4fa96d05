//! printf-style specifier composition, e.g. `%+010.3f`.

use crate::buffer::ByteCursor;
use crate::int::Digits;
use crate::layout::Flags;

/// `%`, `+`, `-`/`0`, three width digits, `.`, two precision digits, symbol
/// and NUL.
pub const FLOAT_SPEC_CAPACITY: usize = 11;

/// Widest field a specifier can carry.
pub const MAX_SPEC_WIDTH: usize = 999;
/// Highest precision a specifier can carry.
pub const MAX_SPEC_PRECISION: usize = 99;

/// Compose `%[+][-|0][width].precision<symbol>` into `buf`.
///
/// Width is only written when non-zero, and the `-`/`0` flag only with it.
/// `buf` must be at least [`FLOAT_SPEC_CAPACITY`] bytes. Returns `None` when
/// `width` exceeds [`MAX_SPEC_WIDTH`] or `precision` exceeds
/// [`MAX_SPEC_PRECISION`].
pub fn compose_spec(
    buf: &mut [u8],
    symbol: u8,
    width: usize,
    precision: usize,
    flags: Flags,
) -> Option<&str> {
    debug_assert!(buf.len() >= FLOAT_SPEC_CAPACITY);
    debug_assert!(symbol.is_ascii_alphabetic());
    if width > MAX_SPEC_WIDTH || precision > MAX_SPEC_PRECISION {
        return None;
    }

    let mut cur = ByteCursor::new(&mut *buf);
    cur.push(b'%');
    if flags.show_sign {
        cur.push(b'+');
    }

    if width > 0 {
        if flags.left {
            cur.push(b'-');
        } else if flags.pad_zeros {
            cur.push(b'0');
        }
        let n = if width < 10 {
            1
        } else if width < 100 {
            2
        } else {
            3
        };
        width.write_decimal(&mut cur.tail()[..n]);
        cur.advance(n);
    }

    cur.push(b'.');
    let n = if precision < 10 { 1 } else { 2 };
    precision.write_decimal(&mut cur.tail()[..n]);
    cur.advance(n);

    cur.push(symbol);
    let len = cur.terminate();
    Some(std::str::from_utf8(&buf[..len]).expect("specifier is ascii"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(symbol: u8, width: usize, precision: usize, flags: Flags) -> String {
        let mut buf = [0u8; FLOAT_SPEC_CAPACITY];
        compose_spec(&mut buf, symbol, width, precision, flags)
            .expect("encodable")
            .to_string()
    }

    #[test]
    fn zero_pad_with_sign() {
        let flags = Flags::NONE.with_zeros().with_sign();
        assert_eq!(compose(b'f', 10, 3, flags), "%+010.3f");
    }

    #[test]
    fn no_width_drops_alignment_flag() {
        assert_eq!(compose(b'e', 0, 6, Flags::NONE.with_left()), "%.6e");
        assert_eq!(compose(b'f', 0, 0, Flags::NONE.with_zeros()), "%.0f");
    }

    #[test]
    fn left_wins_over_zeros() {
        let flags = Flags::NONE.with_left().with_zeros();
        assert_eq!(compose(b'g', 8, 2, flags), "%-8.2g");
    }

    #[test]
    fn widest_specifier_fits() {
        let flags = Flags::NONE.with_sign().with_zeros();
        let mut buf = [0xFFu8; FLOAT_SPEC_CAPACITY];
        let spec = compose_spec(&mut buf, b'E', 999, 99, flags).map(str::len);
        assert_eq!(spec, Some(FLOAT_SPEC_CAPACITY - 1));
        assert_eq!(&buf, b"%+0999.99E\0");
    }

    #[test]
    fn out_of_range_settings_are_refused() {
        let mut buf = [0u8; FLOAT_SPEC_CAPACITY];
        assert_eq!(compose_spec(&mut buf, b'f', 1000, 2, Flags::NONE), None);
        assert_eq!(compose_spec(&mut buf, b'f', 8, 100, Flags::NONE), None);
    }
}
