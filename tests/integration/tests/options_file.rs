//! Integration tests for loading options from a file and walking with them.

mod common;

use std::io::Write;

use common::{init_tracing, sample};
use flatwalk::{FlatwalkError, Options, PointerPolicy, RootName, flatten};
use flatwalk_value::Value;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn options_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_loaded_options_drive_flatten() {
    init_tracing();
    let file = options_file(
        r#"{
            "expandUnexported": true,
            "delimiter": "/",
            "sortMapKeys": true,
            "pointerPolicy": "justValue"
        }"#,
    );
    let options = Options::from_file(file.path()).unwrap();
    assert_eq!(options.pointer_policy, PointerPolicy::JustValue);
    assert_eq!(options.root_name, RootName::Empty);

    let flat = flatten(&sample().root, &options);
    assert_eq!(flat["S/notExportedMap/k"], Value::from("v"));
    assert_eq!(flat["PtrPtr"], Value::from(123_i64));
    assert_eq!(flat["notExportedPointer"], Value::from("string"));
    assert!(!flat.contains_key("NilSlice"));
}

#[test]
fn test_root_placeholder_from_file() {
    let file = options_file(r#"{ "rootName": { "placeholder": "value" } }"#);
    let options = Options::from_file(file.path()).unwrap();

    let flat = flatten(&Value::from(5_i64), &options);
    assert_eq!(flat["value"], Value::from(5_i64));
}

#[test]
fn test_unknown_option_is_config_error() {
    let file = options_file(r#"{ "expandPrivate": true }"#);
    let err = Options::from_file(file.path()).unwrap_err();
    assert!(matches!(err, FlatwalkError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Options::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, FlatwalkError::Io(_)));
}
