//! Pipeline tests.


use std::io::{self, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::io::SourceProvider;

/// A source that always fails on open, simulating network errors.
#[derive(Debug)]
pub(crate) struct FailingSource {
    pub id: String,
}

impl SourceProvider for FailingSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        Err(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "simulated connection refused",
        ))
    }
}

/// A source whose open blocks for a while before yielding `body`.
#[derive(Debug)]
pub(crate) struct SlowSource {
    pub delay: Duration,
    pub body: &'static str,
}

impl SourceProvider for SlowSource {
    fn id(&self) -> &str {
        "slow"
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        thread::sleep(self.delay);
        Ok(Box::new(self.body.as_bytes()))
    }
}

/// A source whose open panics.
#[derive(Debug)]
pub(crate) struct PanickingSource;

impl SourceProvider for PanickingSource {
    fn id(&self) -> &str {
        "panics"
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        panic!("source exploded");
    }
}

/// A source that records whether its stream was dropped.
#[derive(Debug, Default)]
pub(crate) struct TrackedSource {
    pub body: &'static str,
    pub opened: Arc<AtomicUsize>,
    pub closed: Arc<AtomicBool>,
}

struct TrackedReader {
    inner: &'static [u8],
    closed: Arc<AtomicBool>,
}

impl Read for TrackedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for TrackedReader {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

impl SourceProvider for TrackedSource {
    fn id(&self) -> &str {
        "tracked"
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TrackedReader {
            inner: self.body.as_bytes(),
            closed: Arc::clone(&self.closed),
        }))
    }
}
