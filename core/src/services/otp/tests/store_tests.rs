//! Unit tests for the in-memory OTP store

use std::sync::Arc;

use crate::services::otp::{InMemoryOtpStore, OtpStoreTrait};

#[tokio::test]
async fn test_put_overwrites_previous_code() {
    let store = InMemoryOtpStore::new();

    store.put("a@x.com", "111111").await.unwrap();
    store.put("a@x.com", "222222").await.unwrap();

    assert_eq!(store.peek("a@x.com").await.unwrap(), Some("222222".to_string()));
}

#[tokio::test]
async fn test_consume_removes_entry() {
    let store = InMemoryOtpStore::new();
    store.put("a@x.com", "123456").await.unwrap();

    assert_eq!(store.consume("a@x.com").await.unwrap(), Some("123456".to_string()));
    assert_eq!(store.consume("a@x.com").await.unwrap(), None);
    assert_eq!(store.peek("a@x.com").await.unwrap(), None);
}

#[tokio::test]
async fn test_consume_if_matches_leaves_mismatch_untouched() {
    let store = InMemoryOtpStore::new();
    store.put("a@x.com", "123456").await.unwrap();

    assert!(!store.consume_if_matches("a@x.com", "654321").await.unwrap());
    assert_eq!(store.peek("a@x.com").await.unwrap(), Some("123456".to_string()));

    assert!(store.consume_if_matches("a@x.com", "123456").await.unwrap());
    assert_eq!(store.peek("a@x.com").await.unwrap(), None);
}

#[tokio::test]
async fn test_keys_are_case_sensitive() {
    let store = InMemoryOtpStore::new();
    store.put("A@x.com", "123456").await.unwrap();

    assert_eq!(store.peek("a@x.com").await.unwrap(), None);
    assert!(!store.consume_if_matches("a@x.com", "123456").await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_consumers_succeed_once() {
    let store = Arc::new(InMemoryOtpStore::new());
    store.put("a@x.com", "123456").await.unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.consume_if_matches("a@x.com", "123456").await.unwrap() })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
}
