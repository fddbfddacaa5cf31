//! Request assembly for the curator.
//!
//! The model sees a fixed system preamble and the whole transcript rendered
//! as a play script:
//!
//! ```text
//! Curator: Welcome to The Eight Space. ...
//! Visitor: What is the current exhibition?
//! Curator:
//! ```

use eightspace_types::catalog::ArtworkContext;
use eightspace_types::chat::Message;
use eightspace_types::llm::CompletionRequest;

use super::persona::CURATOR_PREAMBLE;

pub struct CuratorPromptBuilder;

impl CuratorPromptBuilder {
    /// The system preamble, with one extra sentence when the visitor is
    /// looking at a specific artwork.
    pub fn system_preamble(artwork: Option<&ArtworkContext>) -> String {
        match artwork {
            Some(artwork) => format!(
                "{CURATOR_PREAMBLE}\n\nThe user is currently looking at a piece titled \"{}\" by {}. \
                 Use this context to answer their questions directly related to what they are seeing.",
                artwork.title, artwork.artist
            ),
            None => CURATOR_PREAMBLE.to_string(),
        }
    }

    /// Render the transcript, in order, followed by the curator's cue.
    pub fn render_dialogue(transcript: &[Message]) -> String {
        let mut dialogue = String::new();
        for message in transcript {
            dialogue.push_str(message.role.label());
            dialogue.push_str(": ");
            dialogue.push_str(&message.text);
            dialogue.push('\n');
        }
        dialogue.push_str("Curator:");
        dialogue
    }

    pub fn build_request(
        model: &str,
        transcript: &[Message],
        artwork: Option<&ArtworkContext>,
    ) -> CompletionRequest {
        CompletionRequest {
            model: model.to_string(),
            system: Self::system_preamble(artwork),
            prompt: Self::render_dialogue(transcript),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eightspace_types::artist::Artist;

    #[test]
    fn test_preamble_without_artwork() {
        let preamble = CuratorPromptBuilder::system_preamble(None);
        assert_eq!(preamble, CURATOR_PREAMBLE);
        assert!(!preamble.contains("currently looking at"));
    }

    #[test]
    fn test_preamble_with_artwork() {
        let artwork = ArtworkContext {
            title: "Martin Seck 2".to_string(),
            artist: Artist::MartinSeck,
        };
        let preamble = CuratorPromptBuilder::system_preamble(Some(&artwork));
        assert!(preamble.starts_with(CURATOR_PREAMBLE));
        assert!(preamble.contains("a piece titled \"Martin Seck 2\" by Martin Seck."));
    }

    #[test]
    fn test_render_dialogue() {
        let transcript = vec![
            Message::curator("Welcome."),
            Message::visitor("Who is Rodney Dickson?"),
        ];
        let dialogue = CuratorPromptBuilder::render_dialogue(&transcript);
        assert_eq!(
            dialogue,
            "Curator: Welcome.\nVisitor: Who is Rodney Dickson?\nCurator:"
        );
    }

    #[test]
    fn test_last_visitor_line_appears_once() {
        let transcript = vec![Message::curator("Welcome."), Message::visitor("Hello")];
        let request = CuratorPromptBuilder::build_request("m", &transcript, None);
        assert_eq!(request.prompt.matches("Visitor: Hello").count(), 1);
        assert_eq!(request.model, "m");
    }
}
