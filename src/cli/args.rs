use clap::{Parser, ValueEnum};

use crate::float::{FloatSpec, MAX_SPEC_PRECISION, MAX_SPEC_WIDTH, Notation};
use crate::int::Radix;
use crate::layout::Flags;

/// Largest width the printf specifier can carry (three digits).
pub const MAX_WIDTH: usize = MAX_SPEC_WIDTH;
/// Largest precision the printf specifier can carry (two digits).
pub const MAX_PRECISION: usize = MAX_SPEC_PRECISION;
const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RadixArg {
    Dec,
    Oct,
    Hex,
    #[value(name = "HEX")]
    HexUpper,
}

impl From<RadixArg> for Radix {
    fn from(arg: RadixArg) -> Self {
        match arg {
            RadixArg::Dec => Radix::Decimal,
            RadixArg::Oct => Radix::Octal,
            RadixArg::Hex => Radix::Hex { upper: false },
            RadixArg::HexUpper => Radix::Hex { upper: true },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotationArg {
    Fixed,
    Sci,
    #[value(name = "SCI")]
    SciUpper,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Fixed => Notation::Fixed,
            NotationArg::Sci => Notation::Scientific,
            NotationArg::SciUpper => Notation::ScientificUpper,
        }
    }
}

/// CLI argument parsing & validation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "numrender",
    about = "Render a number into a fixed buffer with printf-style width, padding and sign.",
    override_usage = "numrender <VALUE> [--radix dec|oct|hex|HEX] [--float fixed|sci|SCI] [--width <n>] [--precision <n>] [--left] [--zero] [--plus] [--json]"
)]
pub struct Args {
    /// Integer (decimal, 0x.., 0o..) or float value.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Integer base (default: dec).
    #[arg(long, value_enum, conflicts_with = "float")]
    pub radix: Option<RadixArg>,

    /// Render VALUE as a float in this notation.
    #[arg(long, value_enum)]
    pub float: Option<NotationArg>,

    /// Minimum field width: 0..=999.
    #[arg(long, value_name = "N", default_value_t = 0, value_parser = parse_width)]
    pub width: usize,

    /// Float precision: 0..=99 (default: 6).
    #[arg(long, value_name = "N", value_parser = parse_precision, requires = "float")]
    pub precision: Option<usize>,

    /// Left-justify within the width.
    #[arg(long)]
    pub left: bool,

    /// Pad with zeros between sign and digits.
    #[arg(long)]
    pub zero: bool,

    /// Always show a sign.
    #[arg(long)]
    pub plus: bool,

    /// Emit JSON output (single object).
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn flags(&self) -> Flags {
        Flags {
            show_sign: self.plus,
            pad_zeros: self.zero,
            left: self.left,
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix.map_or(Radix::Decimal, Radix::from)
    }

    /// Float settings, when `--float` was given.
    pub fn float_spec(&self) -> Option<FloatSpec> {
        let notation = Notation::from(self.float?);
        Some(FloatSpec {
            notation,
            width: self.width,
            precision: self.precision.unwrap_or(DEFAULT_PRECISION),
            flags: self.flags(),
        })
    }
}

fn parse_width(raw: &str) -> Result<usize, String> {
    parse_bounded(raw, "width", MAX_WIDTH)
}

fn parse_precision(raw: &str) -> Result<usize, String> {
    parse_bounded(raw, "precision", MAX_PRECISION)
}

fn parse_bounded(raw: &str, label: &str, max: usize) -> Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("{label} must be a non-negative integer"))?;
    if value > max {
        return Err(format!("{label} must be <= {max}"));
    }
    Ok(value)
}
