//! Builder for creating Pipeline instances.

use std::sync::Arc;
use std::time::Duration;

use crate::config::PipelineConfig;
use crate::io::{DisplaySurface, HttpSource, SOURCE_URL, SourceProvider, StdoutSurface};
use crate::pipeline::Pipeline;

/// Assembles a [`Pipeline`].
///
/// Without overrides the pipeline fetches [`SOURCE_URL`] over HTTP and prints
/// the table to stdout.
pub struct PipelineBuilder {
    url: String,
    source: Option<Arc<dyn SourceProvider>>,
    surface: Option<Arc<dyn DisplaySurface>>,
    timeout: Option<Duration>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
            source: None,
            surface: None,
            timeout: None,
        }
    }

    pub fn from_config(config: PipelineConfig) -> Self {
        let timeout = config.timeout();
        Self {
            url: config.url,
            timeout,
            ..Self::new()
        }
    }

    /// Fetch from a different URL. Ignored when a source is set explicitly.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_source(mut self, source: Arc<dyn SourceProvider>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_surface(mut self, surface: Arc<dyn DisplaySurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Pipeline {
        let source = self
            .source
            .unwrap_or_else(|| Arc::new(HttpSource::new(self.url)));
        let surface = self
            .surface
            .unwrap_or_else(|| Arc::new(StdoutSurface::new()));

        let pipeline = Pipeline::new(source, surface);
        match self.timeout {
            Some(limit) => pipeline.with_timeout(limit),
            None => pipeline,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
