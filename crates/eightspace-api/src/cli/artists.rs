//! `eightspace artists` -- the roster and artist profiles.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use serde::Serialize;

use eightspace_types::artist::Artist;
use eightspace_types::catalog::ArtistImage;
use eightspace_types::navigation::Page;

use crate::state::AppState;

use super::{Output, parse_artist, print_json};

#[derive(Serialize)]
struct ArtistSummary<'a> {
    artist: Artist,
    exhibition: Option<&'a str>,
    works: usize,
    image: Option<ArtistImage>,
}

fn summarize(state: &AppState, artist: Artist) -> ArtistSummary<'_> {
    ArtistSummary {
        artist,
        exhibition: state
            .catalog
            .exhibition_for_artist(artist)
            .map(|exhibition| exhibition.title.as_str()),
        works: state.catalog.pieces_by(artist).count(),
        image: state.catalog.artist_image(artist).ok(),
    }
}

/// List all artists, sorted by name.
pub fn list_artists(state: &AppState, output: Output) -> Result<()> {
    state.navigator.navigate(Page::Artists);
    let summaries: Vec<ArtistSummary<'_>> = state
        .catalog
        .artists()
        .into_iter()
        .map(|artist| summarize(state, artist))
        .collect();

    if output.json {
        return print_json(&summaries);
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Artist").fg(Color::White),
        Cell::new("Exhibition").fg(Color::White),
        Cell::new("Works").fg(Color::White),
    ]);

    for summary in &summaries {
        table.add_row(vec![
            Cell::new(summary.artist).fg(Color::Cyan),
            Cell::new(summary.exhibition.unwrap_or("-")),
            Cell::new(summary.works).fg(Color::DarkGrey),
        ]);
    }

    println!("{table}");
    if output.decorated() {
        println!(
            "  {} Show a profile with {}",
            style("i").blue().bold(),
            style("eightspace artists <name>").yellow()
        );
    }
    Ok(())
}

/// Show one artist's profile: biography, portrait and exhibition.
pub fn show_artist(state: &AppState, name: &str, output: Output) -> Result<()> {
    let artist = parse_artist(name)?;
    let profile = state.catalog.artist_profile(artist)?;
    state.navigator.navigate(Page::Artists);
    state.navigator.open_lightbox(profile.clone());

    if output.json {
        #[derive(Serialize)]
        struct Profile<'a> {
            #[serde(flatten)]
            summary: ArtistSummary<'a>,
            biography: Option<&'a str>,
        }
        return print_json(&Profile {
            summary: summarize(state, artist),
            biography: state.catalog.biography(artist).ok(),
        });
    }

    println!();
    println!(
        "  {}  {}",
        style(artist).cyan().bold(),
        style(profile.subtitle.as_deref().unwrap_or_default()).dim()
    );
    println!();
    if let Some(bio) = profile.description.as_deref() {
        println!("  {bio}");
        println!();
    }
    println!("  {}  {}", style("Image:").bold(), style(&profile.url).dim());
    match state.catalog.exhibition_for_artist(artist) {
        Some(exhibition) => {
            println!("  {}  {}", style("Exhibition:").bold(), exhibition.title);
            if output.decorated() {
                println!();
                println!(
                    "  {} See the works with {}",
                    style("i").blue().bold(),
                    style(format!("eightspace works \"{artist}\"")).yellow()
                );
            }
        }
        None => println!("  {}  {}", style("Exhibition:").bold(), style("none").dim()),
    }
    println!();
    Ok(())
}
