use crate::{CoreError, IdentityRegistry, IdentityUpdate, NewIdentity, Owner};

use googletest::prelude::*;

fn owner(id: &str) -> Owner {
    Owner::parse(id).unwrap()
}

fn fields(name: &str, email: &str) -> NewIdentity {
    NewIdentity::new(name, email)
}

// =========================================================================
// Register
// =========================================================================

#[tokio::test]
async fn given_unregistered_owner_when_register_then_get_returns_fields() {
    let registry = IdentityRegistry::in_memory();
    let alice = owner("0xa11ce");

    registry
        .register(&alice, fields("Alice", "alice@example.com"))
        .await
        .unwrap();

    let identity = registry.get(&alice).await.unwrap();
    assert_that!(identity.name, eq("Alice"));
    assert_that!(identity.email, eq("alice@example.com"));
    assert_that!(identity.owner, eq(&alice));
}

#[tokio::test]
async fn given_registered_owner_when_register_again_then_already_registered_and_first_values_kept()
 {
    let registry = IdentityRegistry::in_memory();
    let alice = owner("0xa11ce");
    registry
        .register(&alice, fields("Alice", "alice@example.com"))
        .await
        .unwrap();

    let result = registry
        .register(&alice, fields("Bob", "bob@example.com"))
        .await;

    assert!(matches!(result, Err(CoreError::AlreadyRegistered { .. })));
    let identity = registry.get(&alice).await.unwrap();
    assert_that!(identity.name, eq("Alice"));
    assert_that!(identity.email, eq("alice@example.com"));
    assert_that!(registry.list_users().await.unwrap(), len(eq(1)));
}

#[tokio::test]
async fn given_empty_name_or_email_when_register_then_invalid_input_and_no_record() {
    let registry = IdentityRegistry::in_memory();
    let alice = owner("0xa11ce");

    let empty_name = registry
        .register(&alice, fields("", "alice@example.com"))
        .await;
    let empty_email = registry.register(&alice, fields("Alice", "")).await;

    assert!(matches!(
        empty_name,
        Err(CoreError::InvalidInput { field: "name", .. })
    ));
    assert!(matches!(
        empty_email,
        Err(CoreError::InvalidInput { field: "email", .. })
    ));
    assert!(matches!(
        registry.get(&alice).await,
        Err(CoreError::NotRegistered { .. })
    ));
    assert_that!(registry.list_users().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_registered_owner_when_register_with_empty_name_then_already_registered_wins() {
    let registry = IdentityRegistry::in_memory();
    let alice = owner("0xa11ce");
    registry
        .register(&alice, fields("Alice", "alice@example.com"))
        .await
        .unwrap();

    let result = registry.register(&alice, fields("", "")).await;

    assert!(matches!(result, Err(CoreError::AlreadyRegistered { .. })));
}

// =========================================================================
// Update
// =========================================================================

#[tokio::test]
async fn given_unregistered_owner_when_update_then_not_registered() {
    let registry = IdentityRegistry::in_memory();

    let result = registry
        .update(
            &owner("0xb0b"),
            IdentityUpdate::new("Bob", "bob@example.com"),
        )
        .await;

    assert!(matches!(result, Err(CoreError::NotRegistered { .. })));
    assert_that!(registry.list_identities().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_registered_owner_when_update_then_values_replaced_and_position_kept() {
    let registry = IdentityRegistry::in_memory();
    let alice = owner("0xa11ce");
    let bob = owner("0xb0b");
    registry
        .register(&alice, fields("Alice", "alice@example.com"))
        .await
        .unwrap();
    registry
        .register(&bob, fields("Bob", "bob@example.com"))
        .await
        .unwrap();

    registry
        .update(
            &alice,
            IdentityUpdate::new("Alice Updated", "alice_updated@example.com"),
        )
        .await
        .unwrap();

    let identity = registry.get(&alice).await.unwrap();
    assert_that!(identity.name, eq("Alice Updated"));
    assert_that!(identity.email, eq("alice_updated@example.com"));
    assert_that!(
        registry.list_users().await.unwrap(),
        elements_are![eq(&alice), eq(&bob)]
    );
}

#[tokio::test]
async fn given_registered_owner_when_update_with_empty_email_then_invalid_input_and_unchanged() {
    let registry = IdentityRegistry::in_memory();
    let alice = owner("0xa11ce");
    registry
        .register(&alice, fields("Alice", "alice@example.com"))
        .await
        .unwrap();

    let result = registry
        .update(&alice, IdentityUpdate::new("Alice Updated", ""))
        .await;

    assert!(matches!(
        result,
        Err(CoreError::InvalidInput { field: "email", .. })
    ));
    let identity = registry.get(&alice).await.unwrap();
    assert_that!(identity.name, eq("Alice"));
}

#[tokio::test]
async fn given_registered_owner_when_update_with_profile_image_then_image_stored() {
    let registry = IdentityRegistry::in_memory();
    let alice = owner("0xa11ce");
    registry
        .register(&alice, fields("Alice", "alice@example.com"))
        .await
        .unwrap();

    let updated = registry
        .update(
            &alice,
            IdentityUpdate::new("Alice", "alice@example.com")
                .with_profile_image("data:image/jpeg;base64,/9j/4AAQ"),
        )
        .await
        .unwrap();

    assert_that!(
        updated.profile_image,
        some(eq("data:image/jpeg;base64,/9j/4AAQ"))
    );
    assert_that!(
        registry.get(&alice).await.unwrap().profile_image,
        some(eq("data:image/jpeg;base64,/9j/4AAQ"))
    );
}

// =========================================================================
// Delete
// =========================================================================

#[tokio::test]
async fn given_three_owners_when_middle_deleted_then_order_of_survivors_kept() {
    let registry = IdentityRegistry::in_memory();
    let a = owner("0xa");
    let b = owner("0xb");
    let c = owner("0xc");
    for (o, name) in [(&a, "A"), (&b, "B"), (&c, "C")] {
        registry
            .register(o, fields(name, "x@example.com"))
            .await
            .unwrap();
    }
    assert_that!(
        registry.list_users().await.unwrap(),
        elements_are![eq(&a), eq(&b), eq(&c)]
    );

    registry.delete(&b).await.unwrap();

    assert_that!(
        registry.list_users().await.unwrap(),
        elements_are![eq(&a), eq(&c)]
    );
    assert!(matches!(
        registry.get(&b).await,
        Err(CoreError::NotRegistered { .. })
    ));
    let names: Vec<String> = registry
        .list_identities()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_that!(names, elements_are![eq("A"), eq("C")]);
}

#[tokio::test]
async fn given_unregistered_owner_when_delete_then_not_registered() {
    let registry = IdentityRegistry::in_memory();

    let result = registry.delete(&owner("0xghost")).await;

    assert!(matches!(result, Err(CoreError::NotRegistered { .. })));
}

#[tokio::test]
async fn given_deleted_owner_when_registered_again_then_appended_at_end() {
    let registry = IdentityRegistry::in_memory();
    let a = owner("0xa");
    let b = owner("0xb");
    registry.register(&a, fields("A", "a@example.com")).await.unwrap();
    registry.register(&b, fields("B", "b@example.com")).await.unwrap();

    registry.delete(&a).await.unwrap();
    registry
        .register(&a, fields("A again", "a@example.com"))
        .await
        .unwrap();

    assert_that!(
        registry.list_users().await.unwrap(),
        elements_are![eq(&b), eq(&a)]
    );
    assert_that!(registry.get(&a).await.unwrap().name, eq("A again"));
}

// =========================================================================
// Listing
// =========================================================================

#[tokio::test]
async fn given_fresh_registry_when_listing_then_both_lists_empty() {
    let registry = IdentityRegistry::in_memory();

    assert_that!(registry.list_users().await.unwrap(), is_empty());
    assert_that!(registry.list_identities().await.unwrap(), is_empty());
    assert_that!(registry.count().await.unwrap(), eq(0));
}

#[tokio::test]
async fn given_alice_and_bob_registered_when_list_identities_then_returned_in_order() {
    let registry = IdentityRegistry::in_memory();
    let a = owner("0xA");
    let b = owner("0xB");
    registry
        .register(&a, fields("Alice", "alice@example.com"))
        .await
        .unwrap();
    registry
        .register(&b, fields("Bob", "bob@example.com"))
        .await
        .unwrap();

    let identities = registry.list_identities().await.unwrap();

    assert_that!(identities, len(eq(2)));
    assert_that!(identities[0].owner, eq(&a));
    assert_that!(identities[0].name, eq("Alice"));
    assert_that!(identities[0].email, eq("alice@example.com"));
    assert_that!(identities[1].owner, eq(&b));
    assert_that!(identities[1].name, eq("Bob"));
    assert_that!(identities[1].email, eq("bob@example.com"));
}

// =========================================================================
// Concurrency
// =========================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_registrations_for_same_owner_then_exactly_one_succeeds() {
    let registry = IdentityRegistry::in_memory();
    let alice = owner("0xa11ce");

    let attempts = (0..16).map(|i| {
        let registry = registry.clone();
        let alice = alice.clone();
        tokio::spawn(async move {
            registry
                .register(&alice, fields(&format!("Alice {i}"), "alice@example.com"))
                .await
        })
    });

    let results = futures::future::join_all(attempts).await;
    let successes = results
        .into_iter()
        .map(|joined| joined.unwrap())
        .filter(|r| r.is_ok())
        .count();

    assert_that!(successes, eq(1));
    assert_that!(registry.list_users().await.unwrap(), len(eq(1)));
}
