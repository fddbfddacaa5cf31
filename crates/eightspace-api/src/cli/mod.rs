//! CLI command definitions for the `eightspace` binary.
//!
//! Uses clap derive macros for argument parsing. Each gallery page has a
//! command of its own, plus `chat`/`ask` for the AI curator.

pub mod artists;
pub mod ask;
pub mod chat;
pub mod exhibitions;
pub mod info;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};

use eightspace_types::artist::Artist;

/// Explore The Eight Space and talk to its AI curator.
#[derive(Parser)]
#[command(name = "eightspace", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except results and errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long, global = true, hide = true)]
    pub otel: bool,

    /// Data directory holding `config.toml` (default: ~/.eightspace).
    #[arg(long, global = true, env = "EIGHTSPACE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive conversation with the AI curator.
    Chat {
        /// Art piece id (e.g. `art-5`) the conversation starts in front of.
        #[arg(long)]
        artwork: Option<String>,
    },

    /// Ask the AI curator a single question.
    Ask {
        /// The question.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Art piece id the question is about.
        #[arg(long)]
        artwork: Option<String>,
    },

    /// List the gallery's artists, or show one artist's profile.
    Artists {
        /// Artist name (e.g. "Martin Seck" or martin-seck).
        artist: Option<String>,
    },

    /// List exhibition posters, or show one exhibition's gallery.
    #[command(alias = "ex")]
    Exhibitions {
        /// Exhibition title.
        title: Option<String>,

        /// Only show works by this artist.
        #[arg(long)]
        artist: Option<String>,
    },

    /// Jump to the exhibition an artist shows in, filtered to their works.
    Works {
        /// Artist name.
        artist: String,
    },

    /// About The Eight Space.
    About,

    /// Visiting information.
    Visit,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Global output switches passed to every handler.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    /// Whether decorative output (banners, spinners, hints) should be printed.
    pub fn decorated(&self) -> bool {
        !self.json && !self.quiet
    }
}

/// Parse an artist name given on the command line.
pub fn parse_artist(name: &str) -> anyhow::Result<Artist> {
    name.parse::<Artist>().map_err(|e| {
        let known: Vec<&str> = Artist::ALL.iter().map(|a| a.display_name()).collect();
        anyhow::anyhow!("{e} (known artists: {})", known.join(", "))
    })
}

/// A steady "thinking" spinner, hidden when output is not decorated.
pub fn spinner(output: Output, message: &'static str) -> ProgressBar {
    if !output.decorated() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print a JSON value, pretty-printed.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
