//! Request orchestration: parse value → size buffer → render → output.

use std::error::Error;

use crate::buffer::INT_CAPACITY;
use crate::cli::args::{Args, MAX_WIDTH};
use crate::cli::exit::Outcome;
use crate::cli::value::{IntValue, ValueError, parse_float, parse_int};
use crate::float::{FLOAT_SPEC_CAPACITY, FloatSpec};
use crate::int::{IntRender, Integer, Radix};
use crate::layout::Flags;
use crate::output::human::{render_human, render_refusal_human};
use crate::output::json::{Format, Kind, RefusalReport, RenderReport, render_json};

/// Widest integer field the CLI can request, plus terminator.
const INT_FIELD_CAPACITY: usize = if MAX_WIDTH + 1 > INT_CAPACITY {
    MAX_WIDTH + 1
} else {
    INT_CAPACITY
};

pub struct RenderResult {
    pub outcome: Outcome,
    pub output: String,
}

pub fn run(args: &Args) -> Result<RenderResult, Box<dyn Error>> {
    tracing::debug!(
        value = %args.value,
        width = args.width,
        float = args.float.is_some(),
        "render request"
    );

    let report = match args.float_spec() {
        Some(spec) => parse_float(&args.value).map(|x| render_float(x, spec)),
        None => parse_int(&args.value).map(|value| match value {
            IntValue::Signed(v) => render_int(v, args.radix(), args.flags(), args.width),
            IntValue::Unsigned(v) => render_int(v, args.radix(), args.flags(), args.width),
        }),
    };

    match report {
        Ok(report) => {
            let output = if args.json {
                render_json(&report)?
            } else {
                render_human(&report.text)
            };
            Ok(RenderResult {
                outcome: Outcome::Rendered,
                output,
            })
        }
        Err(err) => refusal(args, &err),
    }
}

fn refusal(args: &Args, err: &ValueError) -> Result<RenderResult, Box<dyn Error>> {
    tracing::warn!(error = %err, "value refused");
    let output = if args.json {
        render_json(&RefusalReport {
            error: err.to_string(),
        })?
    } else {
        render_refusal_human(&err.to_string())
    };
    Ok(RenderResult {
        outcome: Outcome::Refusal,
        output,
    })
}

fn render_int<T: Integer>(value: T, radix: Radix, flags: Flags, width: usize) -> RenderReport {
    let helper = IntRender::new(value, radix);
    let len = helper.layout_len(flags, width);
    tracing::trace!(digits = helper.digits(), len, "integer length");

    let mut buf = [0u8; INT_FIELD_CAPACITY];
    let written = helper.render_layout(flags, width, &mut buf);
    debug_assert_eq!(written, len);

    RenderReport {
        kind: Kind::Int,
        text: String::from_utf8_lossy(&buf[..written]).into_owned(),
        len: written,
        capacity: len + 1,
        width,
        flags,
        format: Format::Int { radix },
        spec: None,
    }
}

fn render_float(x: f64, spec: FloatSpec) -> RenderReport {
    let capacity = spec.max_len(x) + 1;
    tracing::trace!(capacity, "float buffer sized from bound");

    let mut buf = vec![0u8; capacity];
    let written = spec.render(x, &mut buf);

    let mut spec_buf = [0u8; FLOAT_SPEC_CAPACITY];
    let printf = spec.compose(&mut spec_buf).map(str::to_string);

    RenderReport {
        kind: Kind::Float,
        text: String::from_utf8_lossy(&buf[..written]).into_owned(),
        len: written,
        capacity,
        width: spec.width,
        flags: spec.flags,
        format: Format::Float {
            notation: spec.notation,
            precision: spec.precision,
        },
        spec: printf,
    }
}
