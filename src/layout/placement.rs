use super::Flags;

/// Where padding goes once the natural length of a value is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Width does not exceed the natural length; no padding.
    None,
    /// Sign, digits, then `pad` spaces.
    Left(usize),
    /// Sign, `pad` zeros, then digits.
    Zero(usize),
    /// `pad` spaces, sign, then digits.
    Right(usize),
}

impl Placement {
    /// Resolve the layout for a field of `width` holding `natural_len` bytes.
    ///
    /// Width is a minimum, never a truncation bound. `left` takes precedence
    /// over `pad_zeros`.
    pub fn plan(width: usize, natural_len: usize, flags: Flags) -> Self {
        if width <= natural_len {
            return Placement::None;
        }
        let pad = width - natural_len;
        if flags.left {
            Placement::Left(pad)
        } else if flags.pad_zeros {
            Placement::Zero(pad)
        } else {
            Placement::Right(pad)
        }
    }

    #[inline]
    pub fn pad(self) -> usize {
        match self {
            Placement::None => 0,
            Placement::Left(n) | Placement::Zero(n) | Placement::Right(n) => n,
        }
    }

    /// Same layout with zero padding replaced by spaces on the left.
    #[inline]
    pub fn without_zeros(self) -> Self {
        match self {
            Placement::Zero(n) => Placement::Right(n),
            other => other,
        }
    }
}

/// Write `n` copies of `byte` at the front of `buf`; returns `n`.
#[inline]
pub fn fill(buf: &mut [u8], n: usize, byte: u8) -> usize {
    buf[..n].fill(byte);
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_width_is_not_a_truncation() {
        assert_eq!(Placement::plan(2, 3, Flags::NONE), Placement::None);
        assert_eq!(Placement::plan(3, 3, Flags::NONE.with_zeros()), Placement::None);
    }

    #[test]
    fn left_wins_over_zeros() {
        let flags = Flags::NONE.with_left().with_zeros();
        assert_eq!(Placement::plan(6, 2, flags), Placement::Left(4));
    }

    #[test]
    fn zero_and_right_layouts() {
        assert_eq!(Placement::plan(6, 3, Flags::NONE.with_zeros()), Placement::Zero(3));
        assert_eq!(Placement::plan(6, 3, Flags::NONE), Placement::Right(3));
        assert_eq!(Placement::Zero(3).without_zeros(), Placement::Right(3));
    }

    #[test]
    fn pad_is_width_minus_natural() {
        assert_eq!(Placement::plan(2, 3, Flags::NONE).pad(), 0);
        assert_eq!(Placement::plan(9, 4, Flags::NONE.with_left()).pad(), 5);
        assert_eq!(Placement::plan(9, 4, Flags::NONE.with_zeros()).pad(), 5);
        assert_eq!(Placement::plan(9, 8, Flags::NONE).pad(), 1);
    }

    #[test]
    fn fill_writes_prefix_only() {
        let mut buf = [b'x'; 5];
        assert_eq!(fill(&mut buf, 3, b' '), 3);
        assert_eq!(&buf, b"   xx");
    }
}
