//! Signed-to-unsigned magnitude conversion.
//!
//! The magnitude of a signed value is computed in the unsigned domain, so
//! `T::MIN` maps to `2^(N-1)` instead of overflowing on negation.

use super::digits::Digits;

mod private {
    pub trait Sealed {}
}

/// A primitive integer that can be rendered.
///
/// This trait is sealed and implemented for every primitive integer type.
pub trait Integer: private::Sealed + Copy {
    /// Unsigned type of the same width.
    type Magnitude: Digits;

    /// Absolute value as the unsigned type of the same width.
    fn magnitude(self) -> Self::Magnitude;

    fn is_negative(self) -> bool;
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Integer for $t {
            type Magnitude = $t;

            #[inline]
            fn magnitude(self) -> $t {
                self
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Integer for $t {
            type Magnitude = $u;

            #[inline]
            fn magnitude(self) -> $u {
                self.unsigned_abs()
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

/// Absolute value of `x` as its unsigned counterpart.
#[inline]
pub fn magnitude<T: Integer>(x: T) -> T::Magnitude {
    x.magnitude()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_is_identity() {
        assert_eq!(magnitude(0u8), 0);
        assert_eq!(magnitude(u64::MAX), u64::MAX);
        assert!(!u32::MAX.is_negative());
    }

    #[test]
    fn signed_minimum_does_not_overflow() {
        assert_eq!(magnitude(i8::MIN), 128u8);
        assert_eq!(magnitude(i16::MIN), 1u16 << 15);
        assert_eq!(magnitude(i32::MIN), 1u32 << 31);
        assert_eq!(magnitude(i64::MIN), 1u64 << 63);
        assert_eq!(magnitude(i128::MIN), 1u128 << 127);
        assert_eq!(magnitude(isize::MIN), 1usize << (usize::BITS - 1));
    }

    #[test]
    fn signed_values() {
        assert_eq!(magnitude(-42i32), 42u32);
        assert_eq!(magnitude(42i32), 42u32);
        assert_eq!(magnitude(i64::MAX), i64::MAX as u64);
        assert!((-1i8).is_negative());
        assert!(!0i8.is_negative());
    }
}
