//! `eightspace ask` -- one question, one answer.

use anyhow::Result;

use crate::state::AppState;

use super::chat::{look_at, reply};
use super::{Output, print_json, spinner};

pub async fn ask(
    state: &AppState,
    question: &str,
    artwork_id: Option<&str>,
    output: Output,
) -> Result<()> {
    if let Some(id) = artwork_id {
        look_at(state, id)?;
    }
    let artwork = state.navigator.viewed_artwork();
    let curator = state.curator();

    let thinking = spinner(output, "the curator is thinking...");
    let result = curator.submit(question, artwork.as_ref()).await;
    thinking.finish_and_clear();
    let answer = result?;

    if output.json {
        return print_json(&answer);
    }
    reply::print_reply(&answer, &state.config.curator.api_key_env, output);
    Ok(())
}
