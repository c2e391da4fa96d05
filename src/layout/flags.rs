use serde::{Deserialize, Serialize};

/// Sign and padding flags for a single render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Emit `+` for non-negative values.
    pub show_sign: bool,
    /// Pad with zeros between the sign and the digits (ignored when `left`).
    pub pad_zeros: bool,
    /// Left-justify within the field width.
    pub left: bool,
}

impl Flags {
    pub const NONE: Flags = Flags {
        show_sign: false,
        pad_zeros: false,
        left: false,
    };

    pub const fn with_sign(mut self) -> Self {
        self.show_sign = true;
        self
    }

    pub const fn with_zeros(mut self) -> Self {
        self.pad_zeros = true;
        self
    }

    pub const fn with_left(mut self) -> Self {
        self.left = true;
        self
    }

    /// Sign byte for a value with the given sign, if any.
    #[inline]
    pub const fn sign_byte(self, negative: bool) -> Option<u8> {
        if negative {
            Some(b'-')
        } else if self.show_sign {
            Some(b'+')
        } else {
            None
        }
    }
}
