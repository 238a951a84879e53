use crate::{CoreError, IdentityUpdate, NewIdentity, ValidationLimits};

fn small_limits() -> ValidationLimits {
    ValidationLimits {
        max_name_length: 5,
        max_email_length: 10,
        max_profile_image_bytes: 8,
    }
}

#[test]
fn test_validate_new_accepts_whitespace_only_text() {
    // Only zero-length text counts as empty
    let limits = ValidationLimits::default();

    assert!(limits.validate_new(&NewIdentity::new(" ", " ")).is_ok());
}

#[test]
fn test_validate_new_reports_first_empty_field() {
    let limits = ValidationLimits::default();

    let result = limits.validate_new(&NewIdentity::new("", ""));

    assert!(matches!(
        result,
        Err(CoreError::InvalidInput { field: "name", .. })
    ));
}

#[test]
fn test_validate_new_length_counts_characters() {
    let limits = small_limits();

    assert!(limits.validate_new(&NewIdentity::new("Zo\u{e9}\u{2713}!", "a@b.c")).is_ok());
    assert!(matches!(
        limits.validate_new(&NewIdentity::new("Zo\u{e9}\u{2713}!!", "a@b.c")),
        Err(CoreError::InvalidInput { field: "name", .. })
    ));
    assert!(matches!(
        limits.validate_new(&NewIdentity::new("Zoe", "abcdef@b.cd")),
        Err(CoreError::InvalidInput { field: "email", .. })
    ));
}

#[test]
fn test_validate_update_checks_profile_image_size() {
    let limits = small_limits();

    let fits = IdentityUpdate::new("Zoe", "a@b.c").with_profile_image("12345678");
    let too_big = IdentityUpdate::new("Zoe", "a@b.c").with_profile_image("123456789");

    assert!(limits.validate_update(&fits).is_ok());
    assert!(matches!(
        limits.validate_update(&too_big),
        Err(CoreError::InvalidInput {
            field: "profile_image",
            ..
        })
    ));
}

#[test]
fn test_invalid_input_error_message_names_field() {
    let limits = ValidationLimits::default();

    let err = limits
        .validate_update(&IdentityUpdate::new("Alice", ""))
        .unwrap_err();

    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(err.to_string().contains("email cannot be empty"));
}
