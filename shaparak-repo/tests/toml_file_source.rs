//! Integration tests for loading configuration files from disk.

use std::io::Write;
use std::path::Path;

use shaparak_repo::build_config_source;
use shaparak_types::{ConfigSource, DriverName, Mode, SourceError};

#[test]
fn loads_configuration_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[shaparak]
mode = "sandbox"

[shaparak.parsian]
pin = "secret"
"#
    )
    .unwrap();

    let source = build_config_source(Some(file.path())).unwrap();

    assert_eq!(source.default_mode(), Some(Mode::Sandbox));
    let parsian = source
        .driver_config(&DriverName::parse("parsian").unwrap())
        .unwrap();
    assert_eq!(parsian.get_str("pin"), Some("secret"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = build_config_source(Some(&path)).unwrap_err();

    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn no_path_starts_empty() {
    let source = build_config_source(None::<&Path>).unwrap();
    assert!(source.is_empty());
    assert_eq!(source.default_mode(), None);
}
