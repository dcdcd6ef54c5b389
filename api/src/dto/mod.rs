//! Request and response bodies. JSON field names are camelCase.

pub mod auth;
pub mod order;
pub mod subscription;

use serde::{Deserialize, Serialize};

/// Body carrying only a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
