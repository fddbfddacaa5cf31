//! Infrastructure layer for The Eight Space.
//!
//! Contains the Gemini implementation of the `LlmProvider` trait defined in
//! `eightspace-core`, environment credential lookup, and the `config.toml`
//! loader.

pub mod config;
pub mod llm;
pub mod secret;
