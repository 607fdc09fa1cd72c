use std::sync::Arc;
use std::time::Duration;

use crate::builder::PipelineBuilder;
use crate::config::PipelineConfig;
use crate::io::{InMemorySource, InMemorySurface, SOURCE_URL};

#[test]
fn default_build_uses_http_source_and_stdout() {
    let pipeline = PipelineBuilder::default().build();

    assert_eq!(pipeline.source().id(), SOURCE_URL);
    assert_eq!(pipeline.surface().id(), "-");
    assert_eq!(pipeline.timeout(), None);
}

#[test]
fn from_config_applies_url_and_timeout() {
    let cfg = PipelineConfig::new()
        .with_url("http://mirror/items.json")
        .with_timeout(Duration::from_millis(250));

    let pipeline = PipelineBuilder::from_config(cfg).build();

    assert_eq!(pipeline.source().id(), "http://mirror/items.json");
    assert_eq!(pipeline.timeout(), Some(Duration::from_millis(250)));
}

#[test]
fn explicit_source_overrides_url() {
    let surface = InMemorySurface::new("screen");
    let pipeline = PipelineBuilder::new()
        .with_url("http://ignored/items.json")
        .with_source(Arc::new(InMemorySource::from_string(
            "inline",
            r#"[{"id":1,"listId":1,"name":"a"}]"#,
        )))
        .with_surface(Arc::new(surface.clone()))
        .build();

    assert_eq!(pipeline.source().id(), "inline");
    pipeline.run().expect("run should succeed");
    assert!(!surface.is_blank());
}
