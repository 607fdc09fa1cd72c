use std::time::Duration;

use crate::config::PipelineConfig;
use crate::io::SOURCE_URL;

#[test]
fn default_points_at_fixed_source_without_timeout() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.url, SOURCE_URL);
    assert_eq!(cfg.timeout(), None);
}

#[test]
fn parse_minimal_config_from_json() {
    let cfg: PipelineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, PipelineConfig::default());
}

#[test]
fn parse_full_config_from_json() {
    let cfg: PipelineConfig =
        serde_json::from_str(r#"{"url": "http://localhost:8080/items.json", "timeout_ms": 1500}"#)
            .unwrap();

    assert_eq!(cfg.url, "http://localhost:8080/items.json");
    assert_eq!(cfg.timeout(), Some(Duration::from_millis(1500)));
}

#[test]
fn with_helpers_set_fields() {
    let cfg = PipelineConfig::new()
        .with_url("http://mirror/items.json")
        .with_timeout(Duration::from_secs(3));

    assert_eq!(cfg.url, "http://mirror/items.json");
    assert_eq!(cfg.timeout_ms, Some(3000));
}
