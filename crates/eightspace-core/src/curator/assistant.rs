//! The curator assistant: one transcript, one question in flight at a time.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{Instrument, debug, info_span, warn};

use eightspace_types::catalog::ArtworkContext;
use eightspace_types::chat::{AssistantState, CuratorReply, Message, ReplyOutcome};
use eightspace_types::error::CuratorError;
use eightspace_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use crate::llm::box_provider::BoxLlmProvider;

use super::persona::{EMPTY_REPLY, FALLBACK_REPLY, SEED_GREETING};
use super::prompt::CuratorPromptBuilder;

#[derive(Debug)]
struct Session {
    transcript: Vec<Message>,
    state: AssistantState,
}

/// Answers visitor questions through an LLM provider.
///
/// Remote failures never surface as errors: they become the fallback
/// curator turn. The session lock is never held across an `.await`.
pub struct CuratorAssistant {
    provider: BoxLlmProvider,
    model: String,
    timeout: Option<Duration>,
    session: Mutex<Session>,
}

impl CuratorAssistant {
    /// Start a session whose transcript holds the seed greeting.
    pub fn new(provider: BoxLlmProvider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            timeout: None,
            session: Mutex::new(Session {
                transcript: vec![Message::curator(SEED_GREETING)],
                state: AssistantState::Idle,
            }),
        }
    }

    /// Bound each model call; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn state(&self) -> AssistantState {
        self.session().state
    }

    /// Snapshot of the transcript, in insertion order.
    pub fn transcript(&self) -> Vec<Message> {
        self.session().transcript.clone()
    }

    /// Ask the curator a question.
    ///
    /// Returns the appended curator turn. The visitor's text is recorded as
    /// typed. Rejects blank input and questions
    /// asked while a previous one is still being answered; in both cases the
    /// transcript is left untouched.
    pub async fn submit(
        &self,
        text: &str,
        artwork: Option<&ArtworkContext>,
    ) -> Result<CuratorReply, CuratorError> {
        if text.trim().is_empty() {
            return Err(CuratorError::EmptyMessage);
        }

        let request = self.begin_turn(text, artwork)?;
        let mut guard = TurnGuard {
            session: &self.session,
            armed: true,
        };

        let span = info_span!(
            "gen_ai.curator",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.operation.name = "chat",
            curator.has_artwork = artwork.is_some(),
        );
        let result = self.call(&request).instrument(span).await;

        let (reply_text, outcome) = match result {
            Ok(response) if response.text.is_empty() => {
                debug!("model returned no text");
                (EMPTY_REPLY.to_string(), ReplyOutcome::EmptyReply)
            }
            Ok(response) => (response.text, ReplyOutcome::Answered),
            Err(e) => {
                warn!(error = %e, "curator request failed, using fallback reply");
                (
                    FALLBACK_REPLY.to_string(),
                    ReplyOutcome::Fallback(e.fallback_kind()),
                )
            }
        };

        let message = Message::curator(reply_text);
        {
            let mut session = self.session();
            session.transcript.push(message.clone());
            session.state = AssistantState::Idle;
        }
        guard.armed = false;

        Ok(CuratorReply { message, outcome })
    }

    /// Record the visitor turn and claim the session.
    fn begin_turn(
        &self,
        text: &str,
        artwork: Option<&ArtworkContext>,
    ) -> Result<CompletionRequest, CuratorError> {
        let mut session = self.session();
        if session.state == AssistantState::AwaitingReply {
            return Err(CuratorError::ReplyPending);
        }

        session.transcript.push(Message::visitor(text));
        session.state = AssistantState::AwaitingReply;

        Ok(CuratorPromptBuilder::build_request(
            &self.model,
            &session.transcript,
            artwork,
        ))
    }

    async fn call(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.provider.complete(request))
                .await
                .unwrap_or_else(|_| Err(LlmError::Timeout(limit))),
            None => self.provider.complete(request).await,
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the session to `Idle` if a submission is dropped mid-flight.
struct TurnGuard<'a> {
    session: &'a Mutex<Session>,
    armed: bool,
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            debug!("submission dropped before settling, releasing turn");
            lock(self.session).state = AssistantState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use eightspace_types::artist::Artist;
    use eightspace_types::chat::{FallbackKind, MessageRole};
    use tokio::sync::Notify;

    use crate::llm::provider::LlmProvider;

    /// Answers every request with a fixed result and records what it was sent.
    struct ScriptedProvider {
        reply: Result<String, fn() -> LlmError>,
        requests: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl ScriptedProvider {
        fn answering(text: &str) -> (Self, Arc<Mutex<Vec<CompletionRequest>>>) {
            let requests = Arc::new(Mutex::new(Vec::new()));
            let provider = Self {
                reply: Ok(text.to_string()),
                requests: Arc::clone(&requests),
            };
            (provider, requests)
        }

        fn failing(error: fn() -> LlmError) -> Self {
            Self {
                reply: Err(error),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(CompletionResponse {
                    text: text.clone(),
                    model: request.model.clone(),
                }),
                Err(error) => Err(error()),
            }
        }
    }

    /// Holds every request until the gate is opened.
    struct GatedProvider {
        gate: Arc<Notify>,
    }

    impl LlmProvider for GatedProvider {
        fn name(&self) -> &str {
            "gated"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.gate.notified().await;
            Ok(CompletionResponse {
                text: "Thank you for waiting.".to_string(),
                model: request.model.clone(),
            })
        }
    }

    fn assistant(provider: impl LlmProvider + 'static) -> CuratorAssistant {
        CuratorAssistant::new(BoxLlmProvider::new(provider), "gemini-3-flash-preview")
    }

    #[tokio::test]
    async fn test_new_session_is_seeded() {
        let (provider, _) = ScriptedProvider::answering("ok");
        let curator = assistant(provider);
        let transcript = curator.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::Curator);
        assert_eq!(transcript[0].text, SEED_GREETING);
        assert_eq!(curator.state(), AssistantState::Idle);
    }

    #[tokio::test]
    async fn test_current_exhibition_scenario() {
        let (provider, requests) =
            ScriptedProvider::answering("The Line Starts From Where You Stand.");
        let curator = assistant(provider);

        let reply = curator
            .submit("What is the current exhibition?", None)
            .await
            .unwrap();

        assert_eq!(reply.outcome, ReplyOutcome::Answered);
        let transcript = curator.transcript();
        let last = transcript.last().unwrap();
        assert_eq!(last.role, MessageRole::Curator);
        assert_eq!(last.text, "The Line Starts From Where You Stand.");
        assert_eq!(last, &reply.message);
        assert_eq!(curator.state(), AssistantState::Idle);

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(
            requests[0]
                .prompt
                .ends_with("Visitor: What is the current exhibition?\nCurator:")
        );
        assert!(requests[0].prompt.starts_with("Curator: Welcome to The Eight Space."));
    }

    #[tokio::test]
    async fn test_transcript_grows_by_two_per_exchange() {
        let (provider, requests) = ScriptedProvider::answering("Indeed.");
        let curator = assistant(provider);

        for question in ["First?", "Second?", "Third?"] {
            curator.submit(question, None).await.unwrap();
        }

        let transcript = curator.transcript();
        assert_eq!(transcript.len(), 7);
        for (i, message) in transcript.iter().enumerate().skip(1) {
            let expected = if i % 2 == 1 {
                MessageRole::Visitor
            } else {
                MessageRole::Curator
            };
            assert_eq!(message.role, expected);
        }
        assert_eq!(transcript[1].text, "First?");
        assert_eq!(transcript[5].text, "Third?");
        assert_eq!(requests.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_blank_input_rejected() {
        let (provider, requests) = ScriptedProvider::answering("unused");
        let curator = assistant(provider);

        assert_eq!(
            curator.submit("", None).await,
            Err(CuratorError::EmptyMessage)
        );
        assert_eq!(
            curator.submit("   ", None).await,
            Err(CuratorError::EmptyMessage)
        );
        assert_eq!(curator.transcript().len(), 1);
        assert_eq!(curator.state(), AssistantState::Idle);
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_becomes_fallback() {
        let curator = assistant(ScriptedProvider::failing(|| LlmError::Provider {
            message: "HTTP 500".to_string(),
        }));

        let reply = curator.submit("Hello?", None).await.unwrap();
        assert_eq!(reply.message.text, FALLBACK_REPLY);
        assert_eq!(reply.outcome, ReplyOutcome::Fallback(FallbackKind::Remote));
        assert_eq!(curator.transcript().len(), 3);
        assert_eq!(curator.state(), AssistantState::Idle);
    }

    #[tokio::test]
    async fn test_missing_credential_reports_kind() {
        let curator = assistant(ScriptedProvider::failing(|| LlmError::MissingCredential));

        let reply = curator.submit("Hello?", None).await.unwrap();
        assert_eq!(reply.message.text, FALLBACK_REPLY);
        assert_eq!(
            reply.outcome,
            ReplyOutcome::Fallback(FallbackKind::MissingCredential)
        );
    }

    #[tokio::test]
    async fn test_empty_model_text_uses_reflect_reply() {
        let (provider, _) = ScriptedProvider::answering("");
        let curator = assistant(provider);

        let reply = curator.submit("Hmm?", None).await.unwrap();
        assert_eq!(reply.message.text, EMPTY_REPLY);
        assert_eq!(reply.outcome, ReplyOutcome::EmptyReply);
    }

    #[tokio::test]
    async fn test_whitespace_model_text_is_kept() {
        let (provider, _) = ScriptedProvider::answering("  ");
        let curator = assistant(provider);

        let reply = curator.submit("Hmm?", None).await.unwrap();
        assert_eq!(reply.message.text, "  ");
        assert_eq!(reply.outcome, ReplyOutcome::Answered);
    }

    #[tokio::test]
    async fn test_visitor_text_recorded_as_typed() {
        let (provider, requests) = ScriptedProvider::answering("Welcome back.");
        let curator = assistant(provider);

        curator.submit("  Who is Martin Seck? ", None).await.unwrap();

        assert_eq!(curator.transcript()[1].text, "  Who is Martin Seck? ");
        let requests = requests.lock().unwrap();
        assert!(requests[0].prompt.contains("Visitor:   Who is Martin Seck? \n"));
    }

    #[tokio::test]
    async fn test_artwork_context_reaches_preamble() {
        let (provider, requests) = ScriptedProvider::answering("It is charred wood.");
        let curator = assistant(provider);
        let artwork = ArtworkContext {
            title: "Napoles Marty 1".to_string(),
            artist: Artist::NapolesMarty,
        };

        curator.submit("What am I seeing?", Some(&artwork)).await.unwrap();
        curator.submit("And now?", None).await.unwrap();

        let requests = requests.lock().unwrap();
        assert!(requests[0].system.contains("\"Napoles Marty 1\" by Napoles Marty"));
        assert!(!requests[1].system.contains("currently looking at"));
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_rejected() {
        let gate = Arc::new(Notify::new());
        let curator = Arc::new(assistant(GatedProvider {
            gate: Arc::clone(&gate),
        }));

        let first = {
            let curator = Arc::clone(&curator);
            tokio::spawn(async move { curator.submit("First question", None).await })
        };

        while curator.state() != AssistantState::AwaitingReply {
            tokio::task::yield_now().await;
        }

        let before = curator.transcript();
        assert_eq!(
            curator.submit("Second question", None).await,
            Err(CuratorError::ReplyPending)
        );
        assert_eq!(curator.transcript(), before);

        gate.notify_one();
        let reply = first.await.unwrap().unwrap();
        assert_eq!(reply.message.text, "Thank you for waiting.");
        assert_eq!(curator.state(), AssistantState::Idle);
        assert_eq!(curator.transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_timeout_becomes_fallback() {
        let curator = assistant(GatedProvider {
            gate: Arc::new(Notify::new()),
        })
        .with_timeout(Some(Duration::from_millis(20)));

        let reply = curator.submit("Are you there?", None).await.unwrap();
        assert_eq!(reply.message.text, FALLBACK_REPLY);
        assert_eq!(reply.outcome, ReplyOutcome::Fallback(FallbackKind::Timeout));
        assert_eq!(curator.state(), AssistantState::Idle);
    }

    #[tokio::test]
    async fn test_sub_second_deadline_is_reported_exactly() {
        let curator = assistant(GatedProvider {
            gate: Arc::new(Notify::new()),
        })
        .with_timeout(Some(Duration::from_millis(20)));
        let request = CuratorPromptBuilder::build_request("m", &curator.transcript(), None);

        match curator.call(&request).await {
            Err(LlmError::Timeout(after)) => {
                assert_eq!(after, Duration::from_millis(20));
                assert_eq!(
                    LlmError::Timeout(after).to_string(),
                    "request timed out after 20ms"
                );
            }
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dropped_submission_releases_turn() {
        let curator = assistant(GatedProvider {
            gate: Arc::new(Notify::new()),
        });

        let abandoned =
            tokio::time::timeout(Duration::from_millis(20), curator.submit("Hello?", None)).await;
        assert!(abandoned.is_err());

        assert_eq!(curator.state(), AssistantState::Idle);
        let transcript = curator.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].role, MessageRole::Visitor);
    }
}
