use std::io;

use miette::Diagnostic;

use crate::error::{PipelineDiagnostic, PipelineError, Stage};

#[test]
fn diagnostic_carries_stage_target_and_help() {
    let err = PipelineError::new(
        Stage::Open,
        "net://example",
        io::Error::new(io::ErrorKind::TimedOut, "timed out"),
    );

    let diag = PipelineDiagnostic::from(err);

    assert_eq!(diag.to_string(), "[Open] on 'net://example'");
    assert!(diag.help().is_some());
    assert!(std::error::Error::source(&diag).is_some());
}
