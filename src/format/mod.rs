//! Document formats handled by the pipeline.
//!
//! This module provides:
//! - `json`: streaming parser turning the source JSON array into `Record`s
//! - `table`: fixed-width text rendering of records
//! - `ParseError`: structural failures while reading the source document

mod json;
mod table;

pub use json::{ParseStats, parse_records, parse_records_from_slice, parse_records_with_stats};
pub use table::{COLUMN_WIDTH, HEADER, render_table, write_table};

use serde_json::error::Category;
use thiserror::Error;

/// Errors that abort parsing of the whole document.
///
/// Per-element validation failures are never reported here; those elements
/// are dropped silently.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying stream failed while being read
    #[error("I/O error while reading document: {0}")]
    Io(#[source] serde_json::Error),

    /// The bytes are not well-formed JSON
    #[error("Malformed JSON at line {line}, column {column}: {source}")]
    Syntax {
        line: usize,
        column: usize,
        source: serde_json::Error,
    },

    /// Well-formed JSON with the wrong shape: not an array of objects, or a
    /// field value of the wrong type
    #[error("Unexpected document shape at line {line}, column {column}: {source}")]
    Shape {
        line: usize,
        column: usize,
        source: serde_json::Error,
    },

    /// The stream ended before the array was closed
    #[error("Document truncated at line {line}, column {column}")]
    Truncated { line: usize, column: usize },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        match err.classify() {
            Category::Io => ParseError::Io(err),
            Category::Syntax => ParseError::Syntax {
                line,
                column,
                source: err,
            },
            Category::Data => ParseError::Shape {
                line,
                column,
                source: err,
            },
            Category::Eof => ParseError::Truncated { line, column },
        }
    }
}
