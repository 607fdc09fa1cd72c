//! Fetch the item list once, print the sorted table, exit.

use std::process::ExitCode;

use listfetch::{PipelineBuilder, PipelineError};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), PipelineError> {
    PipelineBuilder::new().build().run().map(|_| ())
}

#[cfg(not(feature = "miette"))]
fn report(err: PipelineError) {
    eprintln!("listfetch: startup failed: {err}");
}

#[cfg(feature = "miette")]
fn report(err: PipelineError) {
    eprintln!("{:?}", miette::Report::from(err));
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(err);
            ExitCode::FAILURE
        }
    }
}
