//! The Eight Space CLI entry point.
//!
//! Binary name: `eightspace`
//!
//! Parses CLI arguments, loads configuration and the gallery catalog, then
//! dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use eightspace_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut tracing_options = TracingOptions::from_verbosity(cli.verbose);
    if cli.quiet && cli.verbose == 0 {
        tracing_options.default_directive = Some("error".to_string());
    }
    tracing_options.json = cli.json;
    tracing_options.enable_otel = cli.otel;
    if let Err(e) = init_tracing(&tracing_options) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "eightspace", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.data_dir.as_deref()).await;
    let output = cli::Output {
        json: cli.json,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Chat { artwork } => cli::chat::loop_runner::run_chat_loop(&state, artwork).await,
        Commands::Ask { question, artwork } => {
            cli::ask::ask(&state, &question.join(" "), artwork.as_deref(), output).await
        }
        Commands::Artists { artist } => match artist {
            Some(name) => cli::artists::show_artist(&state, &name, output),
            None => cli::artists::list_artists(&state, output),
        },
        Commands::Exhibitions { title, artist } => match title {
            Some(title) => {
                cli::exhibitions::show_exhibition(&state, &title, artist.as_deref(), output)
            }
            None => cli::exhibitions::list_exhibitions(&state, output),
        },
        Commands::Works { artist } => cli::exhibitions::artist_works(&state, &artist, output),
        Commands::About => cli::info::about(&state, output),
        Commands::Visit => cli::info::visit(&state, output),
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
