//! Integration tests for loading configuration files.

use std::io::Write;
use std::time::Duration;

use storybook::Config;

#[test]
fn test_load_explicit_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r#"
api_key = "test-key"
page_count = 4
page_delay_ms = 250

[image]
style = "watercolor"
"#
    )?;

    let config = Config::load(Some(file.path()))?;
    assert_eq!(config.resolve_api_key().as_deref(), Some("test-key"));

    let options = config.generation_options();
    assert_eq!(options.page_count, 4);
    assert_eq!(options.page_delay, Duration::from_millis(250));
    assert!(options.images.build("x").contains("style=watercolor&"));

    Ok(())
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "page_count = \"many\"")?;

    assert!(Config::load(Some(file.path())).is_err());
    Ok(())
}
