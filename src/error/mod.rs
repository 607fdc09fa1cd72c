//! Error types for the fetch pipeline.
//!
//! This module provides:
//! - `Stage`: Indicates where in the pipeline an error occurred
//! - `PipelineError`: A fatal pipeline error with context
//! - `WorkerError`: Failures of the background fetch worker itself

use std::fmt;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the source stream (transport)
    Open,
    /// The document could not be parsed
    Parse,
    /// The background worker could not be started or vanished
    Worker,
    /// No result arrived within the configured timeout
    Timeout,
    /// The display surface rejected the rendered table
    Display,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Parse => write!(f, "Parse"),
            Stage::Worker => write!(f, "Worker"),
            Stage::Timeout => write!(f, "Timeout"),
            Stage::Display => write!(f, "Display"),
        }
    }
}

/// A fatal pipeline error. Nothing is displayed when one of these is returned.
#[derive(Debug)]
pub struct PipelineError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the source or surface involved (URL, "-" for stdout, ...)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl PipelineError {
    pub fn new(
        stage: Stage,
        target: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }

    /// True for failures of the network/stream layer.
    pub fn is_transport(&self) -> bool {
        matches!(self.stage, Stage::Open)
            || (self.stage == Stage::Parse
                && matches!(
                    self.error.downcast_ref::<crate::ParseError>(),
                    Some(crate::ParseError::Io(_))
                ))
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

#[derive(Debug, Error)]
pub enum WorkerError {
    /// The worker dropped its result channel without sending (it panicked)
    #[error("fetch worker exited without reporting a result")]
    Vanished,

    #[error("no result from fetch worker within {0:?}")]
    TimedOut(Duration),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
