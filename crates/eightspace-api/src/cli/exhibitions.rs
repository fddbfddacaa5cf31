//! `eightspace exhibitions` and `eightspace works` -- posters and galleries.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use serde::Serialize;

use eightspace_core::exhibition::{ArtistFilter, ExhibitionView, PosterSelection};
use eightspace_types::catalog::{ArtPiece, Exhibition, LightboxContent};
use eightspace_types::navigation::Page;

use crate::state::AppState;

use super::{Output, parse_artist, print_json};

#[derive(Serialize)]
struct PosterRow<'a> {
    title: &'a str,
    url: &'a str,
    current: bool,
    artists: Vec<String>,
}

/// List exhibition posters; the first is the current exhibition.
pub fn list_exhibitions(state: &AppState, output: Output) -> Result<()> {
    state.navigator.navigate(Page::Exhibition);
    let rows: Vec<PosterRow<'_>> = state
        .catalog
        .posters()
        .iter()
        .enumerate()
        .map(|(index, poster)| PosterRow {
            title: &poster.title,
            url: &poster.url,
            current: index == 0,
            artists: state
                .catalog
                .exhibition(&poster.title)
                .map(|exhibition| exhibition.artists.iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
        })
        .collect();

    if output.json {
        return print_json(&rows);
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Exhibition").fg(Color::White),
        Cell::new("Artists").fg(Color::White),
        Cell::new("").fg(Color::White),
    ]);
    for row in &rows {
        let marker = if row.current {
            Cell::new("● current").fg(Color::Green)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new(row.title).fg(Color::Cyan),
            Cell::new(row.artists.join(", ")),
            marker,
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Open one exhibition's gallery, optionally filtered to one artist.
pub fn show_exhibition(
    state: &AppState,
    title: &str,
    artist: Option<&str>,
    output: Output,
) -> Result<()> {
    state.navigator.navigate(Page::Exhibition);
    let mut view = state.navigator.exhibition_view();

    match view.select_poster(title)? {
        PosterSelection::Gallery => {}
        PosterSelection::Enlarge(content) => return print_enlarged(&content, output),
    }

    if let Some(name) = artist {
        let artist = parse_artist(name)?;
        let outsider = view
            .active_exhibition()
            .filter(|exhibition| !exhibition.features(artist));
        if let Some(exhibition) = outsider {
            anyhow::bail!("{artist} does not show in '{}'", exhibition.title);
        }
        view.set_filter(ArtistFilter::Artist(artist));
    }

    print_gallery(&view, output)
}

/// Follow an artist into their exhibition, the way the artist roster does.
pub fn artist_works(state: &AppState, name: &str, output: Output) -> Result<()> {
    let artist = parse_artist(name)?;
    state.navigator.view_artist_works(artist)?;
    let view = state.navigator.exhibition_view();
    print_gallery(&view, output)
}

#[derive(Serialize)]
struct GalleryOutput<'a> {
    exhibition: &'a Exhibition,
    filter: ArtistFilter,
    pieces: Vec<&'a ArtPiece>,
}

fn print_gallery(view: &ExhibitionView, output: Output) -> Result<()> {
    let Some(exhibition) = view.active_exhibition() else {
        anyhow::bail!("no exhibition is open");
    };
    let pieces = view.pieces();

    if output.json {
        return print_json(&GalleryOutput {
            exhibition,
            filter: view.filter(),
            pieces,
        });
    }

    if output.decorated() {
        println!();
        println!("  {}", style(&exhibition.title).cyan().bold());
        println!("  {}", style(&exhibition.curator_credit).dim());
        if let Some(tagline) = &exhibition.tagline {
            println!();
            println!("  {}", style(tagline).italic());
        }
        for paragraph in &exhibition.description {
            println!();
            println!("  {paragraph}");
        }
        println!();
    }

    if view.shows_artist_filters() && output.decorated() {
        let active = match view.filter() {
            ArtistFilter::All => "All Works".to_string(),
            ArtistFilter::Artist(artist) => artist.to_string(),
        };
        println!("  {}  {}", style("Showing:").bold(), active);
        println!();
    }

    if pieces.is_empty() {
        println!("  {}", style("No works found for this category.").dim());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Artist").fg(Color::White),
    ]);
    for piece in &pieces {
        table.add_row(vec![
            Cell::new(&piece.id).fg(Color::DarkGrey),
            Cell::new(&piece.title).fg(Color::Cyan),
            Cell::new(piece.artist),
        ]);
    }
    println!("{table}");

    if output.decorated() {
        println!(
            "  {} Ask about a piece with {}",
            style("i").blue().bold(),
            style("eightspace chat --artwork <id>").yellow()
        );
    }
    Ok(())
}

fn print_enlarged(content: &LightboxContent, output: Output) -> Result<()> {
    if output.json {
        return print_json(content);
    }
    println!();
    if let Some(title) = &content.title {
        println!("  {}", style(title).cyan().bold());
    }
    println!("  {}", style(&content.url).dim());
    println!();
    Ok(())
}
