//! Email one-time-password module
//!
//! This module provides the two-step confirmation handshake:
//! - Code issuance: a 6-digit code is stored per email and mailed out
//! - Code verification: an exact match consumes the code and marks the user verified
//!
//! Codes never expire and verification attempts are not counted. A code stays
//! valid until it is consumed or a newer code for the same email replaces it.
//! Throttling is expected to happen in front of this service.

mod config;
mod service;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use service::{OtpService, CODE_LENGTH};
pub use store::{InMemoryOtpStore, OtpStoreTrait};
pub use types::{SendOtpResult, VerifyOtpResult};
