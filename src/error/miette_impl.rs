//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{PipelineError, Stage};

/// A diagnostic wrapper for pipeline errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct PipelineDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Open => "Check network connectivity and that the source URL is reachable",
        Stage::Parse => "The source did not return a JSON array of item objects",
        Stage::Worker => "The background fetch stopped unexpectedly; see the log output",
        Stage::Timeout => "The source did not answer in time; retry or raise the timeout",
        Stage::Display => "The rendered table could not be written to the output",
    }
}

impl From<PipelineError> for PipelineDiagnostic {
    fn from(e: PipelineError) -> Self {
        PipelineDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage).into()),
            source: Some(e.error),
            severity: Severity::Error,
        }
    }
}

impl From<PipelineError> for miette::Report {
    fn from(e: PipelineError) -> Self {
        miette::Report::new(PipelineDiagnostic::from(e))
    }
}
