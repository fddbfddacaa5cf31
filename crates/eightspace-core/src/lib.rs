//! Business logic for The Eight Space gallery companion.
//!
//! This crate defines the static catalog, the view navigator and exhibition
//! sub-view, the curator assistant, and the `LlmProvider` port that the
//! infrastructure layer implements. It depends only on `eightspace-types` --
//! never on `eightspace-infra` or any HTTP crate.

pub mod catalog;
pub mod curator;
pub mod exhibition;
pub mod llm;
pub mod navigator;
