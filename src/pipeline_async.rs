//! Async entry point for hosts that already run a Tokio runtime.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{PipelineError, Stage, WorkerError};
use crate::format::render_table;
use crate::pipeline::{Pipeline, fetch_and_parse};
use crate::record::{Record, sort_records};

impl Pipeline {
    /// Async counterpart of [`Pipeline::run`].
    pub async fn run_async(&self) -> Result<String, PipelineError> {
        let mut records = self
            .fetch_async()
            .await
            .inspect_err(|e| warn!(error = %e, "fetch failed"))?;
        sort_records(&mut records);
        let table = render_table(&records);

        let surface = self.surface();
        surface
            .present(&table)
            .map_err(|e| PipelineError::new(Stage::Display, surface.id(), e))?;
        info!(rows = records.len(), surface = surface.id(), "table presented");
        Ok(table)
    }

    /// Fetch and parse on Tokio's blocking pool, awaiting the single result.
    pub async fn fetch_async(&self) -> Result<Vec<Record>, PipelineError> {
        let source = Arc::clone(self.source());
        let target = source.id().to_string();
        let task = tokio::task::spawn_blocking(move || fetch_and_parse(source.as_ref()));

        let joined = match self.timeout() {
            Some(limit) => tokio::time::timeout(limit, task).await.map_err(|_| {
                PipelineError::new(Stage::Timeout, target.clone(), WorkerError::TimedOut(limit))
            })?,
            None => task.await,
        };

        joined.map_err(|e| PipelineError::new(Stage::Worker, target, e))?
    }
}
