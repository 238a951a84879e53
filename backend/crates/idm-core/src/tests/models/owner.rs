use crate::{CoreError, MAX_OWNER_LENGTH, Owner};

use std::str::FromStr;

#[test]
fn test_owner_parse_trims_whitespace() {
    let owner = Owner::parse("  0xAbC123  ").unwrap();

    assert_eq!(owner.as_str(), "0xAbC123");
    assert_eq!(owner.to_string(), "0xAbC123");
}

#[test]
fn test_owner_comparison_is_exact() {
    let lower = Owner::parse("0xabc").unwrap();
    let upper = Owner::parse("0xABC").unwrap();

    assert_ne!(lower, upper);
}

#[test]
fn test_owner_parse_rejects_empty() {
    for value in ["", "   ", "\t"] {
        let result = Owner::parse(value);
        assert!(
            matches!(result, Err(CoreError::InvalidInput { field: "owner", .. })),
            "expected rejection for {value:?}"
        );
    }
}

#[test]
fn test_owner_parse_rejects_inner_whitespace() {
    assert!(Owner::parse("0xabc def").is_err());
    assert!(Owner::parse("0xabc\ndef").is_err());
}

#[test]
fn test_owner_parse_length_limit() {
    let at_limit = "a".repeat(MAX_OWNER_LENGTH);
    let over_limit = "a".repeat(MAX_OWNER_LENGTH + 1);

    assert!(Owner::parse(&at_limit).is_ok());
    assert!(Owner::parse(&over_limit).is_err());
}

#[test]
fn test_owner_from_str() {
    let owner = Owner::from_str("account-1").unwrap();
    assert_eq!(owner.as_ref(), "account-1");
}

#[test]
fn test_owner_serializes_as_plain_string() {
    let owner = Owner::parse("0xabc").unwrap();
    let json = serde_json::to_string(&owner).unwrap();
    assert_eq!(json, "\"0xabc\"");
}
