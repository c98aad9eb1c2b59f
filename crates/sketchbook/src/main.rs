//! Prints the sketchbook demonstration transcript.

use anyhow::{Context, Result};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    sketchbook::demo::run_demo(&mut stdout.lock()).context("demonstration failed")?;

    Ok(())
}
