//! Standard output surface.

use std::io::{self, Write};

use super::DisplaySurface;

/// Surface that writes the table to stdout.
#[derive(Debug, Clone)]
pub struct StdoutSurface {
    id: String,
}

impl StdoutSurface {
    /// Create a new stdout surface.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdoutSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for StdoutSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn present(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}
