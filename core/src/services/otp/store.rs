//! Storage for live one-time passwords

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Trait for the OTP store: at most one live code per email
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Store a code, replacing any unconsumed code for the same email
    async fn put(&self, email: &str, code: &str) -> Result<(), String>;
    /// Read the live code without consuming it
    async fn peek(&self, email: &str) -> Result<Option<String>, String>;
    /// Remove and return the live code
    async fn consume(&self, email: &str) -> Result<Option<String>, String>;
    /// Remove the live code only if it equals `code`; reports whether it did
    async fn consume_if_matches(&self, email: &str, code: &str) -> Result<bool, String>;
}

/// Process-local OTP store guarded by a mutex
///
/// Every operation is a single critical section, so an issuance racing a
/// verification for the same email either lands before the comparison or
/// after the removal, never in between. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    codes: Mutex<HashMap<String, String>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_codes<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> Result<T, String> {
        let mut codes = self
            .codes
            .lock()
            .map_err(|_| "OTP store lock poisoned".to_string())?;
        Ok(f(&mut codes))
    }
}

#[async_trait]
impl OtpStoreTrait for InMemoryOtpStore {
    async fn put(&self, email: &str, code: &str) -> Result<(), String> {
        self.with_codes(|codes| {
            codes.insert(email.to_string(), code.to_string());
        })
    }

    async fn peek(&self, email: &str) -> Result<Option<String>, String> {
        self.with_codes(|codes| codes.get(email).cloned())
    }

    async fn consume(&self, email: &str) -> Result<Option<String>, String> {
        self.with_codes(|codes| codes.remove(email))
    }

    async fn consume_if_matches(&self, email: &str, code: &str) -> Result<bool, String> {
        self.with_codes(|codes| match codes.get(email) {
            Some(stored) if stored == code => {
                codes.remove(email);
                true
            }
            _ => false,
        })
    }
}
