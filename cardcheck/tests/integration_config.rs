//! Scheme tables loaded from configuration.
//!
//! These tests cover deserializing `SchemeDefinition` lists and compiling them
//! with `SchemeTable::new`, including the errors a bad configuration produces.

#![cfg(feature = "serde")]

use cardcheck::{DigitString, Scheme, SchemeDefinition, SchemeTable, TableError, Validator};

const CONFIG: &str = r#"[
    { "name": "Internal", "pattern": "9\\d{11}" },
    { "name": "Visa", "pattern": "4\\d{12}(?:\\d{3})?" }
]"#;

fn load(json: &str) -> Result<SchemeTable, TableError> {
    let definitions: Vec<SchemeDefinition> = serde_json::from_str(json).unwrap();
    SchemeTable::new(definitions)
}

#[test]
fn test_table_from_json() {
    let table = load(CONFIG).unwrap();

    assert_eq!(table.names().collect::<Vec<_>>(), vec!["Internal", "Visa"]);
    assert_eq!(
        table.classify(&DigitString::sanitize("9000 1234 5678")).name(),
        "Internal"
    );
    assert_eq!(
        table.classify(&DigitString::sanitize("4111111111111111")).name(),
        "Visa"
    );
    assert_eq!(
        table.classify(&DigitString::sanitize("5555555555554444")),
        Scheme::Unknown
    );
}

#[test]
fn test_loaded_table_drives_validator() {
    let table = load(CONFIG).unwrap();
    let result = Validator::new(&table)
        .validate_raw("9000-1234-5678")
        .unwrap();

    assert_eq!(result.scheme().name(), "Internal");
    assert_eq!(result.masked(), "**** **** 5678");
}

#[test]
fn test_duplicate_names_in_config() {
    let json = r#"[
        { "name": "A", "pattern": "1\\d+" },
        { "name": "A", "pattern": "2\\d+" }
    ]"#;
    assert!(matches!(load(json), Err(TableError::DuplicateName(name)) if name == "A"));
}

#[test]
fn test_invalid_pattern_in_config() {
    let json = r#"[{ "name": "Broken", "pattern": "[0-9" }]"#;
    match load(json) {
        Err(TableError::InvalidPattern { name, .. }) => assert_eq!(name, "Broken"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("pattern should not compile"),
    }
}

#[test]
fn test_validation_result_serializes() {
    let table = SchemeTable::builtin();
    let result = Validator::new(&table)
        .validate_raw("3530 1113 3330 0000")
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "scheme": "JCB",
            "checksum_valid": true,
            "masked": "**** **** **** 0000",
        })
    );
}
