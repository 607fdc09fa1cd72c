//! In-memory I/O implementations for testing.

use std::io::{self, Cursor, Read};
use std::sync::{Arc, Mutex, PoisonError};

use super::{DisplaySurface, SourceProvider};

/// In-memory document source.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<[u8]>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::from(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }
}

impl SourceProvider for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.data))))
    }
}

/// In-memory surface that remembers what was presented.
///
/// `contents()` stays `None` until the first successful `present`.
#[derive(Debug, Clone)]
pub struct InMemorySurface {
    id: String,
    shown: Arc<Mutex<Option<String>>>,
}

impl InMemorySurface {
    /// Create a new blank surface.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shown: Arc::new(Mutex::new(None)),
        }
    }

    /// The text currently shown, if any.
    pub fn contents(&self) -> Option<String> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_blank(&self) -> bool {
        self.contents().is_none()
    }
}

impl DisplaySurface for InMemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn present(&self, text: &str) -> io::Result<()> {
        *self.shown.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_owned());
        Ok(())
    }
}
