use std::io::{self, Write};

use eyre::{Result, WrapErr};
use sortswitch_core::{DemoReport, ShowcaseOptions, run_showcase};
use tracing_subscriber::EnvFilter;

// Logs go to stderr so stdout carries only the demo text.
const LOG_FILTER: &str = "warn";

fn run<W: Write>(out: &mut W) -> Result<Vec<DemoReport>> {
    let options = ShowcaseOptions::default();
    tracing::debug!(?options, "starting showcase");
    run_showcase(out, &options).wrap_err("showcase failed")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out)?;

    Ok(())
}
