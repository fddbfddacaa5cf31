//! Welcome banner display for curator chat sessions.

use console::style;

use eightspace_types::catalog::ArtworkContext;

/// Print the welcome banner, followed by the curator's seed greeting.
pub fn print_welcome_banner(
    greeting: &str,
    model: &str,
    provider: &str,
    artwork: Option<&ArtworkContext>,
) {
    println!();
    println!("  {}", style("The Eight Space").cyan().bold());
    println!("  {}", style("50 Elm Street, New Haven").dim());
    println!();
    println!("  {}  {} ({})", style("Model:").bold(), style(model).dim(), provider);
    if let Some(artwork) = artwork {
        println!(
            "  {}  {} by {}",
            style("Viewing:").bold(),
            style(&artwork.title).italic(),
            artwork.artist
        );
    }
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
    println!("  {} {}", style("Curator >").magenta().bold(), greeting);
    println!();
}
