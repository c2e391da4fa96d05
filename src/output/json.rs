// JSON output schema assembly

use serde::Serialize;

use crate::float::Notation;
use crate::int::Radix;
use crate::layout::Flags;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Int,
    Float,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Format {
    Int { radix: Radix },
    Float { notation: Notation, precision: usize },
}

/// One successful rendering.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub kind: Kind,
    pub text: String,
    /// Bytes written, excluding the terminator.
    pub len: usize,
    /// Buffer size reserved before rendering, including the terminator.
    pub capacity: usize,
    pub width: usize,
    pub flags: Flags,
    #[serde(flatten)]
    pub format: Format,
    /// Equivalent printf specifier (floats only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefusalReport {
    pub error: String,
}

pub fn render_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string(report)?;
    out.push('\n');
    Ok(out)
}
