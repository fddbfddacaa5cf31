//! Slash command parsing for the curator chat.

use console::style;

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    Clear,
    Exit,
    /// Show the conversation so far.
    History,
    /// Stand in front of an art piece (by id).
    Look(String),
    /// Step away from the current art piece.
    Away,
    /// List art piece ids.
    Works,
    Unknown(String),
}

/// Parse user input as a slash command. `None` when it is a question.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(' ') {
        Some((cmd, arg)) => (cmd.to_lowercase(), arg.trim()),
        None => (trimmed.to_lowercase(), ""),
    };

    let command = match cmd.as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/clear" | "/cls" => ChatCommand::Clear,
        "/exit" | "/quit" | "/q" => ChatCommand::Exit,
        "/history" => ChatCommand::History,
        "/look" if arg.is_empty() => {
            ChatCommand::Unknown("/look requires an art piece id".to_string())
        }
        "/look" => ChatCommand::Look(arg.to_string()),
        "/away" => ChatCommand::Away,
        "/works" => ChatCommand::Works,
        other => ChatCommand::Unknown(other.to_string()),
    };
    Some(command)
}

pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}        Show this help message", style("/help").cyan());
    println!("  {}       Clear the screen", style("/clear").cyan());
    println!("  {}        End the conversation", style("/exit").cyan());
    println!("  {}     Show the conversation so far", style("/history").cyan());
    println!("  {}   Ask about an art piece", style("/look <id>").cyan());
    println!("  {}        Step away from the art piece", style("/away").cyan());
    println!("  {}       List art piece ids", style("/works").cyan());
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/Q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_look() {
        assert_eq!(
            parse("/look art-5"),
            Some(ChatCommand::Look("art-5".to_string()))
        );
        assert!(matches!(parse("/look"), Some(ChatCommand::Unknown(_))));
        assert_eq!(parse("/away"), Some(ChatCommand::Away));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("What is the current exhibition?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/shop"), Some(ChatCommand::Unknown("/shop".to_string())));
    }
}
