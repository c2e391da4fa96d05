//! Field layout policy shared by the integer and float renderers.

pub mod flags;
pub mod placement;

pub use flags::Flags;
pub use placement::{Placement, fill};
