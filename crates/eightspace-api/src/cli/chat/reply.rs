//! Printing curator turns.

use console::style;

use eightspace_types::chat::{CuratorReply, FallbackKind, ReplyOutcome};

use crate::cli::Output;

/// Print a curator reply, with a hint when the curator could not be reached.
///
/// `key_names` are the environment variables checked for the API key.
pub fn print_reply(reply: &CuratorReply, key_names: &[String], output: Output) {
    if !output.decorated() {
        println!("{}", reply.message.text);
        return;
    }

    println!();
    println!(
        "  {} {}",
        style("Curator >").magenta().bold(),
        reply.message.text.trim()
    );

    if let Some(hint) = fallback_hint(reply.outcome, key_names) {
        println!("  {}", style(hint).dim());
    }
    println!();
}

fn fallback_hint(outcome: ReplyOutcome, key_names: &[String]) -> Option<String> {
    let hint = match outcome {
        ReplyOutcome::Fallback(FallbackKind::MissingCredential) if key_names.is_empty() => {
            "(no API key found: configure curator.api_key_env)".to_string()
        }
        ReplyOutcome::Fallback(FallbackKind::MissingCredential) => {
            format!("(no API key found: set {})", key_names.join(" or "))
        }
        ReplyOutcome::Fallback(FallbackKind::Authentication) => {
            "(the model endpoint rejected the API key)".to_string()
        }
        ReplyOutcome::Fallback(FallbackKind::Timeout) => "(the request timed out)".to_string(),
        ReplyOutcome::Fallback(FallbackKind::Remote) => "(run with -v for details)".to_string(),
        ReplyOutcome::Answered | ReplyOutcome::EmptyReply => return None,
    };
    Some(hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: ReplyOutcome = ReplyOutcome::Fallback(FallbackKind::MissingCredential);

    #[test]
    fn test_fallback_hint() {
        let names = vec!["API_KEY".to_string()];
        assert!(fallback_hint(ReplyOutcome::Answered, &names).is_none());
        assert!(fallback_hint(ReplyOutcome::EmptyReply, &names).is_none());
        assert_eq!(
            fallback_hint(ReplyOutcome::Fallback(FallbackKind::Timeout), &names).as_deref(),
            Some("(the request timed out)")
        );
    }

    #[test]
    fn test_missing_key_hint_names_configured_variables() {
        let names = vec![
            "EIGHTSPACE_GEMINI_KEY".to_string(),
            "GALLERY_KEY".to_string(),
        ];
        assert_eq!(
            fallback_hint(MISSING, &names).as_deref(),
            Some("(no API key found: set EIGHTSPACE_GEMINI_KEY or GALLERY_KEY)")
        );
        assert!(!fallback_hint(MISSING, &names).unwrap().contains("GEMINI_API_KEY"));
        assert!(fallback_hint(MISSING, &[]).unwrap().contains("api_key_env"));
    }
}
