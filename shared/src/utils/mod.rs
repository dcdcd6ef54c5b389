//! Utility helpers shared between crates

pub mod email;
