use std::error::Error;
use std::io;
use std::time::Duration;

use crate::error::{PipelineError, Stage, WorkerError};
use crate::format::{ParseError, parse_records_from_slice};

#[test]
fn pipeline_error_display_includes_stage_and_target() {
    let err = PipelineError::new(
        Stage::Open,
        "https://example.invalid/list.json",
        io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
    );

    assert_eq!(
        err.to_string(),
        "[Open] https://example.invalid/list.json: refused"
    );
    assert!(err.source().is_some());
}

#[test]
fn worker_errors_render_their_cause() {
    let err = PipelineError::new(
        Stage::Timeout,
        "slow",
        WorkerError::TimedOut(Duration::from_secs(2)),
    );
    assert_eq!(err.to_string(), "[Timeout] slow: no result from fetch worker within 2s");
}

#[test]
fn parse_io_failures_count_as_transport() {
    struct Reset;
    impl io::Read for Reset {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    let parse_err = crate::format::parse_records(Reset).expect_err("read fails");
    let err = PipelineError::new(Stage::Parse, "net", parse_err);
    assert!(err.is_transport());
}

#[test]
fn shape_errors_are_not_transport() {
    let parse_err = parse_records_from_slice(b"{}").expect_err("not an array");
    assert!(matches!(parse_err, ParseError::Shape { .. }));
    assert!(parse_err.to_string().starts_with("Unexpected document shape at line 1"));

    let err = PipelineError::new(Stage::Parse, "inline", parse_err);
    assert!(!err.is_transport());
}

#[test]
fn stage_display_names() {
    let names: Vec<String> = [
        Stage::Open,
        Stage::Parse,
        Stage::Worker,
        Stage::Timeout,
        Stage::Display,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(names, ["Open", "Parse", "Worker", "Timeout", "Display"]);
}
