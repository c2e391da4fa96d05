//! Caller-owned output buffers.

pub mod cursor;
pub mod stack;

pub use cursor::ByteCursor;
pub use stack::{INT_CAPACITY, RenderBuf};
