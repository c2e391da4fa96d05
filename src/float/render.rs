//! Float rendering through `core::fmt`.
//!
//! The digits come from the standard formatter; sign, width and padding are
//! applied here with the same layout policy as integers, so the output never
//! exceeds [`FloatSpec::max_len`] and nothing is allocated.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::buffer::ByteCursor;
use crate::layout::{Flags, Placement};

use super::bound::{max_len_fixed, max_len_sci};
use super::spec::compose_spec;

/// Fixed or scientific output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    Fixed,
    Scientific,
    ScientificUpper,
}

impl Notation {
    /// printf conversion symbol.
    pub const fn symbol(self) -> u8 {
        match self {
            Notation::Fixed => b'f',
            Notation::Scientific => b'e',
            Notation::ScientificUpper => b'E',
        }
    }

    /// Upper bound on the unpadded length of `x`.
    pub fn max_len(self, x: f64, precision: usize, show_sign: bool) -> usize {
        match self {
            Notation::Fixed => max_len_fixed(x, precision, show_sign),
            Notation::Scientific | Notation::ScientificUpper => {
                max_len_sci(x, precision, show_sign)
            }
        }
    }
}

/// Settings for rendering one float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatSpec {
    pub notation: Notation,
    pub width: usize,
    pub precision: usize,
    pub flags: Flags,
}

impl FloatSpec {
    pub const fn fixed(precision: usize) -> Self {
        Self {
            notation: Notation::Fixed,
            width: 0,
            precision,
            flags: Flags::NONE,
        }
    }

    pub const fn scientific(precision: usize, upper: bool) -> Self {
        Self {
            notation: if upper {
                Notation::ScientificUpper
            } else {
                Notation::Scientific
            },
            width: 0,
            precision,
            flags: Flags::NONE,
        }
    }

    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub const fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Buffer length (excluding the terminator) that always suffices for `x`.
    pub fn max_len(&self, x: f64) -> usize {
        let bound = self
            .notation
            .max_len(x, self.precision, self.flags.show_sign);
        self.width.max(bound)
    }

    /// The equivalent printf specifier, e.g. `%+010.3f`, or `None` when the
    /// width or precision is too wide for one.
    pub fn compose<'a>(&self, buf: &'a mut [u8]) -> Option<&'a str> {
        compose_spec(
            buf,
            self.notation.symbol(),
            self.width,
            self.precision,
            self.flags,
        )
    }

    /// Render `x` into `out`, NUL-terminated; returns the length written.
    ///
    /// `out` must be longer than [`FloatSpec::max_len`]. NaN never carries a
    /// sign, and non-finite values are space padded even with `pad_zeros`.
    pub fn render(&self, x: f64, out: &mut [u8]) -> usize {
        let mut cur = ByteCursor::for_output(out, self.max_len(x));
        let sign = if x.is_nan() {
            None
        } else {
            self.flags.sign_byte(x.is_sign_negative())
        };
        cur.push_opt(sign);

        let body = cur.position();
        let written = self.write_body(&mut cur, x.abs());
        debug_assert!(written.is_ok(), "float length bound exceeded for {x}");

        let mut placement = Placement::plan(self.width, cur.position(), self.flags);
        if !x.is_finite() {
            placement = placement.without_zeros();
        }
        match placement {
            Placement::None => {}
            Placement::Left(pad) => cur.fill(pad, b' '),
            Placement::Zero(pad) => {
                cur.shift_right(body, pad);
                cur.fill_at(body, pad, b'0');
            }
            Placement::Right(pad) => {
                cur.shift_right(0, pad);
                cur.fill_at(0, pad, b' ');
            }
        }
        cur.terminate()
    }

    fn write_body(&self, cur: &mut ByteCursor<'_>, ax: f64) -> fmt::Result {
        let p = self.precision;
        match self.notation {
            Notation::Fixed => write!(cur, "{ax:.p$}"),
            Notation::Scientific => write!(cur, "{ax:.p$e}"),
            Notation::ScientificUpper => write!(cur, "{ax:.p$E}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(spec: FloatSpec, x: f64) -> String {
        let mut buf = vec![0u8; spec.max_len(x) + 1];
        let n = spec.render(x, &mut buf);
        assert_eq!(buf[n], 0, "terminator");
        String::from_utf8(buf[..n].to_vec()).expect("ascii")
    }

    #[test]
    fn fixed_plain() {
        assert_eq!(render(FloatSpec::fixed(3), 5.24159), "5.242");
        assert_eq!(render(FloatSpec::fixed(0), 2.0), "2");
        assert_eq!(render(FloatSpec::fixed(2), -1.5), "-1.50");
        assert_eq!(render(FloatSpec::fixed(4), 9.9999999), "10.0000");
    }

    #[test]
    fn fixed_layouts_match_std() {
        let zeros = Flags::NONE.with_zeros().with_sign();
        let spec = FloatSpec::fixed(3).with_width(10).with_flags(zeros);
        assert_eq!(render(spec, 5.24159), format!("{:+010.3}", 5.24159));
        assert_eq!(render(spec, -5.24159), format!("{:+010.3}", -5.24159));

        let right = FloatSpec::fixed(2).with_width(8);
        assert_eq!(render(right, -1.5), format!("{:>8.2}", -1.5));

        let left = FloatSpec::fixed(2).with_width(8).with_flags(Flags::NONE.with_left());
        assert_eq!(render(left, 1.5), "1.50    ");
    }

    #[test]
    fn scientific_forms() {
        assert_eq!(render(FloatSpec::scientific(2, false), 1234.5), "1.23e3");
        assert_eq!(render(FloatSpec::scientific(0, true), 0.001), "1E-3");
        assert_eq!(render(FloatSpec::scientific(3, false), -0.0), "-0.000e0");
    }

    #[test]
    fn non_finite_is_space_padded() {
        let spec = FloatSpec::fixed(2)
            .with_width(6)
            .with_flags(Flags::NONE.with_zeros().with_sign());
        assert_eq!(render(spec, f64::INFINITY), "  +inf");
        assert_eq!(render(spec, f64::NEG_INFINITY), "  -inf");
        assert_eq!(render(spec, f64::NAN), "   NaN");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "output buffer too small")]
    fn undersized_buffer_is_a_contract_violation() {
        let spec = FloatSpec::fixed(3).with_width(10);
        let mut buf = [0u8; 10];
        spec.render(5.24159, &mut buf);
    }

    #[test]
    fn compose_matches_settings() {
        let spec = FloatSpec::fixed(3)
            .with_width(10)
            .with_flags(Flags::NONE.with_zeros().with_sign());
        let mut buf = [0u8; crate::float::FLOAT_SPEC_CAPACITY];
        assert_eq!(spec.compose(&mut buf), Some("%+010.3f"));
    }

    #[test]
    fn compose_refuses_unencodable_settings() {
        let mut buf = [0u8; crate::float::FLOAT_SPEC_CAPACITY];
        assert_eq!(FloatSpec::fixed(3).with_width(1000).compose(&mut buf), None);
        assert_eq!(FloatSpec::scientific(100, false).compose(&mut buf), None);

        // Rendering has no such limit.
        let wide = FloatSpec::fixed(1).with_width(1000);
        assert_eq!(render(wide, 1.0).len(), 1000);
    }
}
