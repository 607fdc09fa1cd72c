//! Synchronous pipeline: fetch and parse on one background worker, then sort,
//! render and display on the calling thread.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{PipelineError, Stage, WorkerError};
use crate::format::{parse_records_with_stats, render_table};
use crate::io::{DisplaySurface, SourceProvider};
use crate::record::{Record, sort_records};

const WORKER_NAME: &str = "listfetch-fetch";

/// One fetch-parse-sort-render-display run.
pub struct Pipeline {
    source: Arc<dyn SourceProvider>,
    surface: Arc<dyn DisplaySurface>,
    timeout: Option<Duration>,
}

impl Pipeline {
    /// Create a new pipeline that waits for the fetch indefinitely.
    pub fn new(source: Arc<dyn SourceProvider>, surface: Arc<dyn DisplaySurface>) -> Self {
        Self {
            source,
            surface,
            timeout: None,
        }
    }

    /// Stop waiting for the fetch after `timeout`.
    ///
    /// The worker is not cancelled; its late result is discarded.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn source(&self) -> &Arc<dyn SourceProvider> {
        &self.source
    }

    pub fn surface(&self) -> &Arc<dyn DisplaySurface> {
        &self.surface
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run the whole pipeline once.
    ///
    /// On success the table has been presented and is also returned. On any
    /// error the surface is left untouched.
    pub fn run(&self) -> Result<String, PipelineError> {
        let mut records = self.fetch().inspect_err(|e| warn!(error = %e, "fetch failed"))?;
        sort_records(&mut records);
        let table = render_table(&records);

        self.surface
            .present(&table)
            .map_err(|e| PipelineError::new(Stage::Display, self.surface.id(), e))?;
        info!(
            rows = records.len(),
            surface = self.surface.id(),
            "table presented"
        );
        Ok(table)
    }

    /// Fetch and parse on a background worker, blocking until it reports.
    ///
    /// Records come back in source order.
    pub fn fetch(&self) -> Result<Vec<Record>, PipelineError> {
        let (tx, rx) = mpsc::sync_channel(1);
        let source = Arc::clone(&self.source);

        thread::Builder::new()
            .name(WORKER_NAME.into())
            .spawn(move || {
                // The receiver may be gone after a timeout.
                let _ = tx.send(fetch_and_parse(source.as_ref()));
            })
            .map_err(|e| PipelineError::new(Stage::Worker, self.source.id(), e))?;

        let outcome = match self.timeout {
            Some(limit) => rx.recv_timeout(limit).map_err(|e| match e {
                RecvTimeoutError::Timeout => PipelineError::new(
                    Stage::Timeout,
                    self.source.id(),
                    WorkerError::TimedOut(limit),
                ),
                RecvTimeoutError::Disconnected => {
                    PipelineError::new(Stage::Worker, self.source.id(), WorkerError::Vanished)
                }
            }),
            None => rx.recv().map_err(|_| {
                PipelineError::new(Stage::Worker, self.source.id(), WorkerError::Vanished)
            }),
        };

        outcome?
    }
}

/// The unit of work run off the calling thread.
///
/// The stream is moved into the parser and dropped when parsing ends, so it
/// is closed before this returns on every path.
pub(crate) fn fetch_and_parse(source: &dyn SourceProvider) -> Result<Vec<Record>, PipelineError> {
    let started = Instant::now();
    let reader = source
        .open()
        .map_err(|e| PipelineError::new(Stage::Open, source.id(), e))?;

    let (records, stats) = parse_records_with_stats(reader)
        .map_err(|e| PipelineError::new(Stage::Parse, source.id(), e))?;

    debug!(
        seen = stats.seen,
        kept = stats.kept,
        dropped = stats.dropped(),
        "parsed source document"
    );
    info!(
        source = source.id(),
        records = records.len(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "fetch complete"
    );
    Ok(records)
}
