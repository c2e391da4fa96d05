//! Exit codes & stdout/stderr routing.

/// Result of one CLI invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    Refusal,
}

/// Output mode chosen by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Target stream for output emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

pub fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Rendered => 0,
        Outcome::Refusal => 2,
    }
}

/// In JSON mode everything goes to stdout; in human mode refusals go to
/// stderr.
pub fn output_stream(outcome: Outcome, mode: OutputMode) -> OutputStream {
    match (mode, outcome) {
        (OutputMode::Json, _) => OutputStream::Stdout,
        (OutputMode::Human, Outcome::Refusal) => OutputStream::Stderr,
        (OutputMode::Human, Outcome::Rendered) => OutputStream::Stdout,
    }
}
