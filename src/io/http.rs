//! Network source backed by a blocking HTTP GET.

use std::io::{self, Read};

use tracing::info;

use super::SourceProvider;

/// The item list every run fetches unless a test swaps the source.
pub const SOURCE_URL: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Source that streams the response body of a single GET request.
///
/// No headers, query parameters, or retries. Non-2xx responses fail the open.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(SOURCE_URL)
    }
}

impl SourceProvider for HttpSource {
    fn id(&self) -> &str {
        &self.url
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        info!(url = %self.url, "opening source stream");
        let response = ureq::get(self.url.as_str()).call().map_err(io::Error::other)?;
        Ok(Box::new(response.into_body().into_reader()))
    }
}
