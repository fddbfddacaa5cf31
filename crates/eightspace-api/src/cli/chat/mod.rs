//! Interactive CLI chat with the AI curator.
//!
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod reply;

use anyhow::Result;

use eightspace_types::catalog::{ArtworkContext, LightboxContent};

use crate::state::AppState;

/// Enlarge an art piece so the curator answers with it in mind.
pub fn look_at(state: &AppState, piece_id: &str) -> Result<ArtworkContext> {
    let piece = state.catalog.piece(piece_id)?;
    state
        .navigator
        .open_lightbox(LightboxContent::for_piece(piece));
    Ok(ArtworkContext::from(piece))
}
