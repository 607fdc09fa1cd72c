//! # listfetch
//!
//! Fetch a remote JSON item list, keep only valid entries, sort them and
//! render them as a fixed-width text table.
//!
//! ## Overview
//!
//! One run is a straight pipeline:
//!
//! 1. A single background worker opens the source stream and feeds it to a
//!    streaming JSON parser. Elements missing a valid `id`, `listId` or
//!    non-empty `name` are dropped silently.
//! 2. The caller blocks until the worker reports, then sorts the records by
//!    `listId` and `name`.
//! 3. The records are rendered as three right-aligned columns of width 25
//!    and handed to a `DisplaySurface` exactly once.
//!
//! Any transport or structural failure aborts the run before anything is
//! displayed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use listfetch::{InMemorySource, InMemorySurface, PipelineBuilder};
//!
//! let surface = Arc::new(InMemorySurface::new("screen"));
//! let pipeline = PipelineBuilder::new()
//!     .with_source(Arc::new(InMemorySource::from_string(
//!         "inline",
//!         r#"[{"id": 2, "listId": 1, "name": "Item 2"}]"#,
//!     )))
//!     .with_surface(surface.clone())
//!     .build();
//!
//! pipeline.run()?;
//! assert!(surface.contents().is_some());
//! ```
//!
//! ## Features
//!
//! - `async` - `Pipeline::run_async` on Tokio's blocking pool
//! - `miette` - Pretty error reporting with miette

pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod pipeline;
pub mod record;

#[cfg(feature = "async")]
mod pipeline_async;

// Re-exports for convenience
pub use builder::PipelineBuilder;
pub use config::PipelineConfig;
pub use error::{PipelineError, Stage, WorkerError};
pub use format::{
    COLUMN_WIDTH, HEADER, ParseError, ParseStats, parse_records, parse_records_from_slice,
    parse_records_with_stats, render_table, write_table,
};
pub use io::{
    DisplaySurface, HttpSource, InMemorySource, InMemorySurface, SOURCE_URL, SourceProvider,
    StdoutSurface,
};
pub use pipeline::Pipeline;
pub use record::{Record, UNSET_ID, compare, sort_records};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::PipelineDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
