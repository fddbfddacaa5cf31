//! Curator chat transcript types.
//!
//! A transcript is an ordered list of immutable [`Message`]s exchanged
//! between a visitor and the curator assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    Visitor,
    Curator,
}

impl MessageRole {
    /// Speaker label used when rendering the dialogue for the model.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::Visitor => "Visitor",
            MessageRole::Curator => "Curator",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::Visitor => write!(f, "visitor"),
            MessageRole::Curator => write!(f, "curator"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visitor" => Ok(MessageRole::Visitor),
            "curator" => Ok(MessageRole::Curator),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single transcript entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier (UUID v7 string, time-sortable).
    pub id: String,
    pub role: MessageRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn visitor(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Visitor, text)
    }

    pub fn curator(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Curator, text)
    }
}

/// Turn-taking state of a curator session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantState {
    #[default]
    Idle,
    AwaitingReply,
}

impl fmt::Display for AssistantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantState::Idle => write!(f, "idle"),
            AssistantState::AwaitingReply => write!(f, "awaiting_reply"),
        }
    }
}

/// Why a curator turn carries the fallback text instead of a model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackKind {
    /// No credential was configured for the model endpoint.
    MissingCredential,
    /// The endpoint rejected the credential.
    Authentication,
    /// The client-side deadline elapsed.
    Timeout,
    /// Any other transport, provider or decoding failure.
    Remote,
}

/// How a submitted question was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "kind", rename_all = "snake_case")]
pub enum ReplyOutcome {
    /// The model answered with text.
    Answered,
    /// The model answered, but without any text.
    EmptyReply,
    /// The call failed; the fallback apology was recorded.
    Fallback(FallbackKind),
}

/// The curator turn appended by a settled submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratorReply {
    pub message: Message,
    pub outcome: ReplyOutcome,
}
