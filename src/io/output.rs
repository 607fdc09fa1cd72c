//! Display surface trait definition.

use std::fmt::Debug;

/// Trait for where the rendered table ends up.
///
/// A surface receives one pre-formatted block of text per run and shows it
/// verbatim.
pub trait DisplaySurface: Send + Sync + Debug {
    /// Returns a unique identifier for this surface.
    ///
    /// Convention: "-" for stdout.
    fn id(&self) -> &str;

    /// Present the text, replacing anything shown before.
    fn present(&self, text: &str) -> std::io::Result<()>;
}
