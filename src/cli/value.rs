//! VALUE argument parsing.

/// Error returned when VALUE cannot be read as the requested kind of number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    Empty,
    InvalidInteger(String),
    IntegerOutOfRange(String),
    InvalidFloat(String),
}

impl std::fmt::Display for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueError::Empty => write!(f, "value is empty"),
            ValueError::InvalidInteger(raw) => write!(f, "invalid integer value '{raw}'"),
            ValueError::IntegerOutOfRange(raw) => {
                write!(f, "integer value '{raw}' does not fit in 128 bits")
            }
            ValueError::InvalidFloat(raw) => write!(f, "invalid float value '{raw}'"),
        }
    }
}

impl std::error::Error for ValueError {}

/// A parsed integer in the narrowest 128-bit type that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntValue {
    Signed(i128),
    Unsigned(u128),
}

/// Parse an integer with optional sign and `0x`/`0o`/`0b` prefix.
///
/// Values above `i128::MAX` are kept as `u128`.
pub fn parse_int(raw: &str) -> Result<IntValue, ValueError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValueError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = split_prefix(unsigned);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(ValueError::InvalidInteger(raw.to_string()));
    }
    let digits = digits.replace('_', "");

    let magnitude = u128::from_str_radix(&digits, radix).map_err(|err| {
        use std::num::IntErrorKind;
        match err.kind() {
            IntErrorKind::PosOverflow => ValueError::IntegerOutOfRange(raw.to_string()),
            _ => ValueError::InvalidInteger(raw.to_string()),
        }
    })?;

    if !negative {
        return Ok(match i128::try_from(magnitude) {
            Ok(value) => IntValue::Signed(value),
            Err(_) => IntValue::Unsigned(magnitude),
        });
    }
    0i128
        .checked_sub_unsigned(magnitude)
        .map(IntValue::Signed)
        .ok_or_else(|| ValueError::IntegerOutOfRange(raw.to_string()))
}

fn split_prefix(s: &str) -> (u32, &str) {
    let lower = s.get(..2).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("0x") => (16, &s[2..]),
        Some("0o") => (8, &s[2..]),
        Some("0b") => (2, &s[2..]),
        _ => (10, s),
    }
}

/// Parse a float; `inf`, `-inf` and `nan` are accepted.
pub fn parse_float(raw: &str) -> Result<f64, ValueError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValueError::Empty);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ValueError::InvalidFloat(raw.to_string()))
}
