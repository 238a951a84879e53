use crate::{CoreError, Identity, IdentityStore, MemoryIdentityStore, NewIdentity, Owner};

use googletest::prelude::*;

fn identity(id: &str, name: &str) -> Identity {
    Identity::new(
        Owner::parse(id).unwrap(),
        NewIdentity::new(name, "someone@example.com"),
    )
}

#[tokio::test]
async fn given_empty_store_when_insert_then_find_returns_record() {
    let store = MemoryIdentityStore::new();
    let record = identity("0xa", "A");

    store.insert(&record).await.unwrap();

    assert_that!(store.find(&record.owner).await.unwrap(), some(eq(&record)));
    assert_that!(store.count().await.unwrap(), eq(1));
}

#[tokio::test]
async fn given_existing_owner_when_insert_then_already_registered_and_order_unchanged() {
    let store = MemoryIdentityStore::new();
    let first = identity("0xa", "A");
    store.insert(&first).await.unwrap();

    let result = store.insert(&identity("0xa", "Other")).await;

    assert!(matches!(result, Err(CoreError::AlreadyRegistered { .. })));
    assert_that!(store.list_owners().await.unwrap(), len(eq(1)));
    assert_that!(
        store.find(&first.owner).await.unwrap().map(|i| i.name),
        some(eq("A"))
    );
}

#[tokio::test]
async fn given_missing_owner_when_replace_or_remove_then_not_registered() {
    let store = MemoryIdentityStore::new();
    let ghost = identity("0xghost", "Ghost");

    let replaced = store.replace(&ghost).await;
    let removed = store.remove(&ghost.owner).await;

    assert!(matches!(replaced, Err(CoreError::NotRegistered { .. })));
    assert!(matches!(removed, Err(CoreError::NotRegistered { .. })));
    assert_that!(store.find(&ghost.owner).await.unwrap(), none());
}

#[tokio::test]
async fn given_records_when_replace_then_position_kept() {
    let store = MemoryIdentityStore::new();
    let a = identity("0xa", "A");
    let b = identity("0xb", "B");
    store.insert(&a).await.unwrap();
    store.insert(&b).await.unwrap();

    let mut renamed = a.clone();
    renamed.name = String::from("A2");
    store.replace(&renamed).await.unwrap();

    let names: Vec<String> = store
        .list_identities()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_that!(names, elements_are![eq("A2"), eq("B")]);
}

#[tokio::test]
async fn given_records_when_first_removed_then_lists_stay_aligned() {
    let store = MemoryIdentityStore::new();
    let a = identity("0xa", "A");
    let b = identity("0xb", "B");
    let c = identity("0xc", "C");
    for record in [&a, &b, &c] {
        store.insert(record).await.unwrap();
    }

    store.remove(&a.owner).await.unwrap();

    let owners = store.list_owners().await.unwrap();
    let identity_owners: Vec<Owner> = store
        .list_identities()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.owner)
        .collect();
    assert_that!(owners, elements_are![eq(&b.owner), eq(&c.owner)]);
    assert_that!(identity_owners, eq(&owners));
    assert_that!(store.count().await.unwrap(), eq(2));
}
