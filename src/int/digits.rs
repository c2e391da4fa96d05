//! Digit counting and extraction for base 10, 8 and 16.
//!
//! Counters are exact and never return less than 1. Extractors fill a buffer
//! of exactly the counted length from the right, so the most significant
//! digit lands at index 0.

use std::fmt;

use serde::{Deserialize, Serialize};

const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";
const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Numeric base of an integer rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Radix {
    Decimal,
    Octal,
    Hex { upper: bool },
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Octal => 8,
            Radix::Hex { .. } => 16,
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Unsigned magnitude that can be counted and written in every radix.
///
/// Implemented per primitive type so the inner loops specialize on both the
/// width and the base.
pub trait Digits: private::Sealed + Copy + fmt::Debug {
    fn decimal_len(self) -> usize;
    fn octal_len(self) -> usize;
    fn hex_len(self) -> usize;

    /// Fill all of `buf` with the decimal digits of `self`.
    ///
    /// `buf.len()` must equal [`Digits::decimal_len`].
    fn write_decimal(self, buf: &mut [u8]);
    fn write_octal(self, buf: &mut [u8]);
    fn write_hex(self, upper: bool, buf: &mut [u8]);
}

// Decimal counting runs in `$w`, which must hold 10_000.
macro_rules! impl_digits {
    ($($t:ty as $w:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Digits for $t {
            #[inline]
            fn decimal_len(self) -> usize {
                let mut x = self as $w;
                let mut n = 0;
                while x >= 10_000 {
                    x /= 10_000;
                    n += 4;
                }
                n + if x < 10 {
                    1
                } else if x < 100 {
                    2
                } else if x < 1_000 {
                    3
                } else {
                    4
                }
            }

            #[inline]
            fn octal_len(self) -> usize {
                let mut x = self;
                let mut n = 1;
                while x > 7 {
                    x >>= 3;
                    n += 1;
                }
                n
            }

            #[inline]
            fn hex_len(self) -> usize {
                let mut x = self;
                let mut n = 1;
                while x > 15 {
                    x >>= 4;
                    n += 1;
                }
                n
            }

            fn write_decimal(self, buf: &mut [u8]) {
                debug_assert!(!buf.is_empty());
                let mut m = buf.len() - 1;
                let mut x = self;
                while m > 0 && x > 9 {
                    let q = x / 10;
                    buf[m] = b'0' + (x - q * 10) as u8;
                    m -= 1;
                    x = q;
                }
                debug_assert!(x < 10, "decimal digit count too small for value");
                buf[m] = b'0' + x as u8;
            }

            fn write_octal(self, buf: &mut [u8]) {
                debug_assert!(!buf.is_empty());
                let mut m = buf.len() - 1;
                let mut x = self;
                while m > 0 && x > 7 {
                    buf[m] = b'0' + (x & 7) as u8;
                    m -= 1;
                    x >>= 3;
                }
                debug_assert!(x < 8, "octal digit count too small for value");
                buf[m] = b'0' + x as u8;
            }

            fn write_hex(self, upper: bool, buf: &mut [u8]) {
                debug_assert!(!buf.is_empty());
                let alphabet = if upper { UPPER_HEX } else { LOWER_HEX };
                let mut m = buf.len() - 1;
                let mut x = self;
                while m > 0 && x > 15 {
                    buf[m] = alphabet[(x & 15) as usize];
                    m -= 1;
                    x >>= 4;
                }
                debug_assert!(x < 16, "hex digit count too small for value");
                buf[m] = alphabet[x as usize];
            }
        }
    )*};
}

impl_digits!(
    u8 as u16,
    u16 as u16,
    u32 as u32,
    u64 as u64,
    u128 as u128,
    usize as usize,
);

/// Number of digits `x` renders to in `radix`.
#[inline]
pub fn count_digits<M: Digits>(x: M, radix: Radix) -> usize {
    match radix {
        Radix::Decimal => x.decimal_len(),
        Radix::Octal => x.octal_len(),
        Radix::Hex { .. } => x.hex_len(),
    }
}

/// Fill `buf` with the digits of `x` in `radix`; `buf.len()` is the count.
#[inline]
pub fn write_digits<M: Digits>(x: M, radix: Radix, buf: &mut [u8]) {
    match radix {
        Radix::Decimal => x.write_decimal(buf),
        Radix::Octal => x.write_octal(buf),
        Radix::Hex { upper } => x.write_hex(upper, buf),
    }
}
