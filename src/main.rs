#![forbid(unsafe_code)]

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("NUMRENDER_LOG").unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match numrender::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("numrender: {e}");
            ExitCode::from(2)
        }
    }
}
