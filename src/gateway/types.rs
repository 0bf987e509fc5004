//! Domain records produced by the generation gateway.

use serde::{Deserialize, Serialize};

/// One generated lesson: concept text, a code sample, and an interview tip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLesson {
    pub explanation: String,
    pub code: String,
    pub interview_tip: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub name: String,
    pub language: String,
    pub content: String,
}

/// A hands-on lab: ordered prerequisites and steps plus a small file tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectLab {
    pub title: String,
    pub description: String,
    pub prerequisites: Vec<String>,
    pub steps: Vec<String>,
    pub files: Vec<ProjectFile>,
}

/// Diagram description text, ready for an external renderer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiagramSource(pub String);

impl DiagramSource {
    /// A visibly-marked stand-in used when the backend returns nothing;
    /// renders as a single error node instead of failing the call.
    pub fn placeholder(topic_label: &str) -> Self {
        Self(format!(
            "graph TD\n    err[\"Diagram unavailable: {}\"]",
            topic_label
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opening state of a mock system-design interview.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DesignChallenge {
    pub title: String,
    pub scenario: String,
    pub initial_question: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name expected by the generation backend.
    pub fn provider_name(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "model",
        }
    }
}

/// One message in a conversation transcript.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Behavioral instruction set for the chat surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    Mentor,
    Interviewer,
}
