use crate::{Identity, IdentityUpdate, NewIdentity, Owner};

use chrono::Timelike;

fn alice() -> Identity {
    Identity::new(
        Owner::parse("0xa11ce").unwrap(),
        NewIdentity::new("Alice", "alice@example.com"),
    )
}

#[test]
fn test_identity_new() {
    let identity = alice();

    assert_eq!(identity.owner.as_str(), "0xa11ce");
    assert_eq!(identity.name, "Alice");
    assert_eq!(identity.email, "alice@example.com");
    assert!(identity.profile_image.is_none());
    assert_eq!(identity.registered_at, identity.updated_at);
    assert_eq!(identity.registered_at.nanosecond(), 0);
}

#[test]
fn test_identity_apply_overwrites_fields_and_keeps_owner() {
    let mut identity = alice();
    let registered_at = identity.registered_at;

    identity.apply(IdentityUpdate::new("Alice Updated", "alice_updated@example.com"));

    assert_eq!(identity.owner.as_str(), "0xa11ce");
    assert_eq!(identity.name, "Alice Updated");
    assert_eq!(identity.email, "alice_updated@example.com");
    assert_eq!(identity.registered_at, registered_at);
    assert!(identity.updated_at >= registered_at);
}

#[test]
fn test_identity_apply_without_image_keeps_existing_image() {
    let mut identity = alice();
    identity.apply(
        IdentityUpdate::new("Alice", "alice@example.com")
            .with_profile_image("data:image/png;base64,AAAA"),
    );

    identity.apply(IdentityUpdate::new("Alice", "alice@example.com"));

    assert_eq!(
        identity.profile_image.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

#[test]
fn test_identity_apply_empty_image_clears_it() {
    let mut identity = alice();
    identity.apply(IdentityUpdate::new("Alice", "alice@example.com").with_profile_image("img"));

    identity.apply(IdentityUpdate::new("Alice", "alice@example.com").with_profile_image(""));

    assert!(identity.profile_image.is_none());
}
