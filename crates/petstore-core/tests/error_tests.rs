// Rust guideline compliant 2026-10-17

//! Unit tests for error types and messages.

use petstore_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    assert!(error.to_string().starts_with("IO error"));
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(error.to_string().starts_with("JSON error"));
}

#[test]
fn test_invalid_pet_error_formatting() {
    let error = Error::InvalidPet("Name cannot be empty".to_string());
    assert_eq!(error.to_string(), "Invalid Pet: Name cannot be empty");
}

#[test]
fn test_invalid_id_error_formatting() {
    let error = Error::InvalidId("abc".to_string());
    assert_eq!(error.to_string(), "Invalid ID supplied: abc");
}

#[test]
fn test_not_found_error_formatting() {
    let error = Error::NotFound(42);
    assert_eq!(error.to_string(), "Pet not found: 42");
}

#[test]
fn test_invalid_file_name_formatting() {
    let error = Error::InvalidFileName("..".to_string());
    assert!(error.to_string().contains(".."));
}

#[test]
fn test_io_error_converts_with_question_mark() {
    fn read_missing() -> petstore_core::Result<String> {
        Ok(std::fs::read_to_string("/definitely/not/here/pets.jsonl")?)
    }

    assert!(matches!(read_missing(), Err(Error::Io(_))));
}
