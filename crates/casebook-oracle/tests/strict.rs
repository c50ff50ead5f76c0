use casebook_oracle::error::OracleError;
use casebook_oracle::strict::{parse_json_object, require_exact_keys, strip_code_fence};

#[test]
fn parses_bare_object() {
    let object = parse_json_object(r#" {"a": 1} "#).unwrap();
    assert_eq!(object["a"], 1);
}

#[test]
fn strips_json_code_fence() {
    let text = "```json\n{\"a\": 1}\n```";
    assert_eq!(strip_code_fence(text), "{\"a\": 1}");
    assert!(parse_json_object(text).is_ok());
}

#[test]
fn strips_plain_fence_with_language_line() {
    let text = "```\njson\n{\"a\": 1}\n```\n";
    assert_eq!(strip_code_fence(text), "{\"a\": 1}");
}

#[test]
fn leaves_unfenced_text_alone() {
    assert_eq!(strip_code_fence("  {\"a\": 1}\n"), "{\"a\": 1}");
}

#[test]
fn rejects_non_object_json() {
    assert!(matches!(parse_json_object("[1, 2]"), Err(OracleError::NotAnObject)));
}

#[test]
fn rejects_invalid_json() {
    let err = parse_json_object("Sure! Here is the JSON: {").unwrap_err();
    assert!(matches!(err, OracleError::InvalidJson { .. }));
}

#[test]
fn exact_keys_reports_missing_and_unexpected() {
    let object = parse_json_object(r#"{"a": 1, "c": 3}"#).unwrap();

    let err = require_exact_keys(&object, &["a", "b"]).unwrap_err();
    let OracleError::KeyMismatch { missing, unexpected } = err else {
        panic!("expected key mismatch, got {err:?}");
    };
    assert_eq!(missing, ["b"]);
    assert_eq!(unexpected, ["c"]);

    assert!(require_exact_keys(&object, &["c", "a"]).is_ok());
}
