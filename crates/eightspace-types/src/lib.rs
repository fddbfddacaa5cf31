//! Shared domain types for The Eight Space.
//!
//! This crate contains the domain types used across the gallery companion:
//! artists, catalog entries, navigation values, chat transcript messages,
//! LLM request/response shapes, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod artist;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod navigation;
