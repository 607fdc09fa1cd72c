//! Source provider trait definition.

use std::fmt::Debug;
use std::io::Read;

/// Trait for the stream the item document is read from.
///
/// The provider itself is shared with the background worker; the stream it
/// opens is owned by that worker alone and is closed by dropping it.
pub trait SourceProvider: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    ///
    /// This is used for error messages and logging.
    /// Convention: the URL for network sources.
    fn id(&self) -> &str;

    /// Open and return a new readable stream positioned at the start of the
    /// document.
    fn open(&self) -> std::io::Result<Box<dyn Read>>;
}
