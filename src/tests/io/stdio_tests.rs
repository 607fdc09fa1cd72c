//! Smoke tests for stdout/HTTP providers that need no network.

use crate::{DisplaySurface, HttpSource, SOURCE_URL, SourceProvider, StdoutSurface};

#[test]
fn stdout_surface_uses_dash_id() {
    let out = StdoutSurface::new();
    assert_eq!(out.id(), "-");
    out.present("").expect("empty write to stdout");
}

#[test]
fn http_source_defaults_to_fixed_url() {
    let src = HttpSource::default();
    assert_eq!(src.id(), SOURCE_URL);
    assert_eq!(src.url(), SOURCE_URL);
}

#[test]
fn http_source_rejects_invalid_url_on_open() {
    let src = HttpSource::new("not a url");
    assert!(src.open().is_err());
}
