//! Request-boundary helpers shared by every route

pub mod error;
