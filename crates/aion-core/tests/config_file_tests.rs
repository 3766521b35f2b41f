//! Loading the site config from disk.

use aion_core::{SiteConfig, SiteError};
use tempfile::TempDir;

#[test]
fn load_reads_partial_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("site.json");
    std::fs::write(
        &path,
        r#"{ "donation": { "raised": 425000000 }, "status_interval_ms": 1000 }"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    assert_eq!(config.donation.goal().percent_label(), "25.00%");
    assert_eq!(config.status_interval_ms, 1000);
    assert_eq!(config.counter_steps, 60);
}

#[test]
fn saved_defaults_load_back_unchanged() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("defaults.json");
    let defaults = SiteConfig::default();
    std::fs::write(&path, defaults.to_json_pretty().unwrap()).unwrap();

    assert_eq!(SiteConfig::load(&path).unwrap(), defaults);
}

#[test]
fn missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = SiteConfig::load(temp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SiteError::Io(_)));
}
