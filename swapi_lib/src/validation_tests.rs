use super::*;

#[test]
fn category_plain() {
    assert_eq!(validate_category_name("people").unwrap(), "people");
}

#[test]
fn category_is_not_trimmed() {
    assert_eq!(validate_category_name(" films ").unwrap(), " films ");
}

#[test]
fn category_unicode() {
    assert_eq!(validate_category_name("планеты").unwrap(), "планеты");
}

#[test]
fn category_empty() {
    assert!(validate_category_name("").is_err());
}

#[test]
fn category_dots() {
    assert!(validate_category_name(".").is_err());
    assert!(validate_category_name("..").is_err());
}

#[test]
fn category_with_dots_inside() {
    assert!(validate_category_name("v1.people").is_ok());
}

#[test]
fn category_path_separators() {
    assert!(validate_category_name("../etc").is_err());
    assert!(validate_category_name("a/b").is_err());
    assert!(validate_category_name("a\\b").is_err());
}

#[test]
fn category_control_chars() {
    assert!(validate_category_name("people\n").is_err());
    assert!(validate_category_name("peo\0ple").is_err());
}

#[test]
fn category_too_long() {
    let long = "a".repeat(MAX_CATEGORY_LENGTH + 1);
    assert!(validate_category_name(&long).is_err());
    let max = "a".repeat(MAX_CATEGORY_LENGTH);
    assert!(validate_category_name(&max).is_ok());
}

#[test]
fn category_error_is_invalid_input() {
    assert!(matches!(
        validate_category_name("a/b"),
        Err(SaveError::InvalidInput(_))
    ));
}
