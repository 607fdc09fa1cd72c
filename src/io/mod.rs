//! I/O abstractions for the document source and the display surface.
//!
//! This module provides:
//! - `SourceProvider`: Trait for the stream the document is read from
//! - `DisplaySurface`: Trait for where the rendered table is shown
//! - `HttpSource` for the remote document, `StdoutSurface` for terminals
//! - In-memory implementations for testing

mod http;
mod input;
mod memory;
mod output;
mod std_io;

pub use http::{HttpSource, SOURCE_URL};
pub use input::SourceProvider;
pub use memory::{InMemorySource, InMemorySurface};
pub use output::DisplaySurface;
pub use std_io::StdoutSurface;
