//! Middleware modules for the API
//!
//! This module contains middleware components:
//! - CORS configuration for browser clients

pub mod cors;
