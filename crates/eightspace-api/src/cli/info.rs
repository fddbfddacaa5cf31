//! `eightspace about` and `eightspace visit`.

use anyhow::Result;
use console::style;

use eightspace_types::navigation::Page;

use crate::state::AppState;

use super::{Output, print_json};

pub fn about(state: &AppState, output: Output) -> Result<()> {
    state.navigator.navigate(Page::About);
    let sections = state.catalog.about();
    if output.json {
        return print_json(&sections);
    }

    println!();
    println!("  {}", style("About The Eight Space").cyan().bold());
    for section in sections {
        println!();
        if let Some(heading) = &section.heading {
            println!("  {}", style(heading).bold());
            println!();
        }
        for paragraph in &section.paragraphs {
            println!("  {paragraph}");
        }
    }
    println!();
    Ok(())
}

pub fn visit(state: &AppState, output: Output) -> Result<()> {
    state.navigator.navigate(Page::Visit);
    let Some(visit) = state.catalog.visit() else {
        anyhow::bail!("no visiting information is available");
    };
    if output.json {
        return print_json(visit);
    }

    println!();
    println!("  {}", style(&visit.venue).cyan().bold());
    for line in &visit.address_lines {
        println!("  {line}");
    }
    println!();
    println!("  {}  {}", style("Hours:").bold(), visit.opening_hours);
    println!();
    println!("  {}", style("Accessibility").bold());
    println!("  {}", visit.accessibility);
    println!();
    Ok(())
}
