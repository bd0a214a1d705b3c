use crate::{CLIENT_IDENTIFIER_KEY, KeyValueStore, MemoryStore, USER_IDENTIFIER_KEY};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[tokio::test]
async fn given_empty_store_when_get_then_none() {
    let store = MemoryStore::new();

    let value = store.get(CLIENT_IDENTIFIER_KEY).await.unwrap();

    assert_that!(value, none());
}

#[tokio::test]
async fn given_set_value_when_get_then_returns_value() {
    // Given
    let store = MemoryStore::new();
    store.set(USER_IDENTIFIER_KEY, "u1").await.unwrap();

    // When
    let value = store.get(USER_IDENTIFIER_KEY).await.unwrap();

    // Then
    assert_that!(value, some(eq("u1")));
}

#[tokio::test]
async fn given_prepopulated_store_when_remove_then_only_that_key_removed() {
    // Given
    let store = MemoryStore::with_values([
        (CLIENT_IDENTIFIER_KEY, "c1"),
        (USER_IDENTIFIER_KEY, "u1"),
    ]);

    // When
    store.remove(USER_IDENTIFIER_KEY).await.unwrap();

    // Then
    let snapshot = store.snapshot().await;
    assert_that!(snapshot.len(), eq(1));
    assert_that!(snapshot.get(CLIENT_IDENTIFIER_KEY).map(String::as_str), some(eq("c1")));
}

#[tokio::test]
async fn given_missing_key_when_remove_then_ok() {
    let store = MemoryStore::new();

    let result = store.remove(USER_IDENTIFIER_KEY).await;

    assert!(result.is_ok());
}
