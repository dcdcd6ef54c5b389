//! Authentication route handlers
//!
//! This module contains the email verification endpoints and order intake,
//! which lives under the same `/api/auth` scope:
//! - Sending a one-time password
//! - Verifying a one-time password
//! - Creating an order

pub mod create_order;
pub mod send_otp;
pub mod verify_otp;
