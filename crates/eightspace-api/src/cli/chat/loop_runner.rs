//! Main chat loop orchestration.
//!
//! Opens a curator session, prints the banner with the seed greeting, then
//! reads visitor lines until Ctrl+D or `/exit`. Slash commands move the
//! visitor between art pieces; every other line goes to the curator.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use console::style;
use tracing::warn;

use eightspace_types::chat::MessageRole;

use crate::cli::{Output, spinner};
use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::{look_at, reply};

const OUTPUT: Output = Output {
    json: false,
    quiet: false,
};

/// Run the interactive curator chat, optionally starting in front of a piece.
pub async fn run_chat_loop(state: &AppState, artwork_id: Option<String>) -> anyhow::Result<()> {
    if let Some(id) = artwork_id.as_deref() {
        look_at(state, id)?;
    }

    let curator = state.curator();
    let greeting = curator
        .transcript()
        .first()
        .map(|m| m.text.clone())
        .unwrap_or_default();
    print_welcome_banner(
        &greeting,
        curator.model(),
        curator.provider_name(),
        state.navigator.viewed_artwork().as_ref(),
    );

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Thank you for visiting.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => {
                    println!("\n  {}", style("Thank you for visiting.").dim());
                    break;
                }
                ChatCommand::History => {
                    println!();
                    for message in curator.transcript() {
                        let label = match message.role {
                            MessageRole::Visitor => style("You").green(),
                            MessageRole::Curator => style("Curator").magenta(),
                        };
                        println!("  {} {}", label.bold(), message.text);
                    }
                    println!();
                }
                ChatCommand::Look(id) => match look_at(state, &id) {
                    Ok(artwork) => println!(
                        "\n  {} {} by {}\n",
                        style("Now viewing").cyan().bold(),
                        style(&artwork.title).italic(),
                        artwork.artist
                    ),
                    Err(e) => println!("\n  {} {e}\n", style("!").yellow().bold()),
                },
                ChatCommand::Away => {
                    state.navigator.close_lightbox();
                    println!("\n  {}\n", style("You step back from the artwork.").dim());
                }
                ChatCommand::Works => print_works(state),
                ChatCommand::Unknown(name) => println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                ),
            }
            continue;
        }

        let artwork = state.navigator.viewed_artwork();
        let thinking = spinner(OUTPUT, "the curator is thinking...");
        let result = curator.submit(&text, artwork.as_ref()).await;
        thinking.finish_and_clear();

        match result {
            Ok(answer) => {
                reply::print_reply(&answer, &state.config.curator.api_key_env, OUTPUT)
            }
            Err(e) => {
                warn!(error = %e, "curator turn rejected");
                println!("\n  {} {e}\n", style("!").yellow().bold());
            }
        }
    }

    Ok(())
}

fn print_works(state: &AppState) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Artist"]);
    for piece in state.catalog.pieces() {
        table.add_row(vec![
            piece.id.clone(),
            piece.title.clone(),
            piece.artist.to_string(),
        ]);
    }
    println!("\n{table}\n");
}
