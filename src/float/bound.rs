//! Upper bounds on rendered float length, for sizing buffers before the
//! digits are produced.
//!
//! The bounds may overestimate but never underestimate. Non-finite values
//! are bounded by the length of `inf`/`NaN`.

use crate::int::Digits;

/// Length of the `inf` and `NaN` tokens.
pub const NON_FINITE_LEN: usize = 3;

/// Leading digit, `e`, exponent sign and up to three exponent digits.
///
/// The exponent of a finite `f64` never exceeds `-324`, so this holds for
/// subnormals too.
pub const SCI_BASE_LEN: usize = 6;

// 9.5 and up may round to 10 at low precision.
const ONE_DIGIT_LIMIT: f64 = 9.5;
// Below this, ceil(|x|) fits a u64.
const INTEGER_PATH_LIMIT: f64 = 9e18;

#[inline]
fn sign_len(x: f64, show_sign: bool) -> usize {
    usize::from(x.is_sign_negative() || show_sign)
}

#[inline]
fn fraction_len(precision: usize) -> usize {
    if precision > 0 { precision + 1 } else { 0 }
}

/// Upper bound on the fixed-notation length of `x` at `precision`.
pub fn max_len_fixed(x: f64, precision: usize, show_sign: bool) -> usize {
    if !x.is_finite() {
        return NON_FINITE_LEN + sign_len(x, show_sign);
    }
    let ax = x.abs();
    let integer_digits = if ax < ONE_DIGIT_LIMIT {
        1
    } else if ax < INTEGER_PATH_LIMIT {
        (ax.ceil() as u64).decimal_len()
    } else {
        ax.log10().floor() as usize + 2
    };
    integer_digits + fraction_len(precision) + sign_len(x, show_sign)
}

/// Upper bound on the scientific-notation length of `x` at `precision`.
pub fn max_len_sci(x: f64, precision: usize, show_sign: bool) -> usize {
    if !x.is_finite() {
        return NON_FINITE_LEN + sign_len(x, show_sign);
    }
    SCI_BASE_LEN + fraction_len(precision) + sign_len(x, show_sign)
}
