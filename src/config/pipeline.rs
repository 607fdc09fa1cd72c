//! Pipeline configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::io::SOURCE_URL;

/// Configuration for one fetch-render run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Document URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Give up waiting for the fetch after this many milliseconds.
    /// `None` waits indefinitely.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_url() -> String {
    SOURCE_URL.to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: None,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration pointing at the default source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
