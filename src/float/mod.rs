//! Float length bounds, printf specifiers and `core::fmt`-backed rendering.

pub mod bound;
pub mod render;
pub mod spec;

pub use bound::{NON_FINITE_LEN, SCI_BASE_LEN, max_len_fixed, max_len_sci};
pub use render::{FloatSpec, Notation};
pub use spec::{FLOAT_SPEC_CAPACITY, MAX_SPEC_PRECISION, MAX_SPEC_WIDTH, compose_spec};
