//! Tests for reading kestrel.toml from disk.

use std::fs;

use kestrel_core::NamingConvention;
use kestrel_manifest::{Error, KestrelToml, parse_file};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("kestrel.toml");
    fs::write(&path, content).expect("Failed to write kestrel.toml");
    (dir, path)
}

#[test]
fn test_open_resolves_configuration() {
    let (_dir, path) = write_config(
        r#"
        packageName = "com.example.petstore"
        groupId = "com.example"
        artifactId = "petstore-client"
        enumPropertyNaming = "UPPERCASE"

        [importMappings]
        Money = "org.joda.money.Money"
        "#,
    );

    let file = KestrelToml::open(&path).unwrap();
    let config = file.config();

    assert_eq!(file.path(), path.as_path());
    assert!(file.content().contains("petstore-client"));
    assert_eq!(config.model_package(), "com.example.petstore.models");
    assert_eq!(config.api_package(), "com.example.petstore.apis");
    assert_eq!(config.artifact_id(), "petstore-client");
    assert_eq!(config.enum_property_naming(), NamingConvention::Uppercase);
    assert_eq!(
        config.import_mappings().get("Money").map(String::as_str),
        Some("org.joda.money.Money")
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = parse_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_invalid_naming_fails_startup() {
    let (_dir, path) = write_config("enumPropertyNaming = \"lowercase\"\n");
    let err = parse_file(&path).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("'lowercase' is an invalid enum property naming option"));
    assert!(message.contains("snake_case"));
}
