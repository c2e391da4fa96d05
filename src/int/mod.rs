//! Integer rendering in base 10, 8 and 16.

pub mod digits;
pub mod magnitude;
pub mod render;

pub use digits::{Digits, Radix, count_digits, write_digits};
pub use magnitude::{Integer, magnitude};
pub use render::IntRender;
