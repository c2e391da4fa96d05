#![forbid(unsafe_code)]

pub mod buffer;
pub mod cli;
pub mod float;
pub mod int;
pub mod layout;
pub mod orchestrator;
pub mod output;

pub use buffer::{ByteCursor, INT_CAPACITY, RenderBuf};
pub use float::{FloatSpec, Notation, compose_spec, max_len_fixed, max_len_sci};
pub use int::{Digits, IntRender, Integer, Radix, magnitude};
pub use layout::Flags;

/// Run the numrender CLI. Returns exit code (0 or 2).
pub fn run() -> Result<u8, Box<dyn std::error::Error>> {
    run_with(std::env::args_os(), &mut std::io::stdout(), &mut std::io::stderr())
}

/// Run against an explicit argv (program name first) and output streams.
pub fn run_with<I, T>(
    argv: I,
    stdout: &mut dyn std::io::Write,
    stderr: &mut dyn std::io::Write,
) -> Result<u8, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    use clap::Parser;

    let args = match cli::args::Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 2 } else { 0 };
            let sink: &mut dyn std::io::Write = if err.use_stderr() { &mut *stderr } else { &mut *stdout };
            write!(sink, "{err}")?;
            sink.flush()?;
            return Ok(code);
        }
    };

    let result = orchestrator::run(&args)?;
    let mode = if args.json {
        cli::exit::OutputMode::Json
    } else {
        cli::exit::OutputMode::Human
    };
    let sink: &mut dyn std::io::Write = match cli::exit::output_stream(result.outcome, mode) {
        cli::exit::OutputStream::Stdout => &mut *stdout,
        cli::exit::OutputStream::Stderr => &mut *stderr,
    };
    sink.write_all(result.output.as_bytes())?;
    sink.flush()?;

    Ok(cli::exit::exit_code(result.outcome))
}
