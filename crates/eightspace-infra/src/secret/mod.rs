//! Credential sources.

pub mod env;
