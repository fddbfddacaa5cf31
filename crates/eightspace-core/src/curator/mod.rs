//! The AI curator: persona texts, prompt assembly and the assistant session.

pub mod assistant;
pub mod persona;
pub mod prompt;

pub use assistant::CuratorAssistant;
