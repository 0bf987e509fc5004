//! Chat surfaces: append-only transcripts that never block further input.
//!
//! A failed reply becomes an ordinary assistant turn carrying an apology
//! line, so the surface has no `Failed` state and the input stays enabled.

use crate::gateway::{ChatMode, ConversationTurn, GenerationResult, Provider};
use crate::service::ContentService;
use std::sync::Arc;

pub const MENTOR_GREETING: &str = "Hi! I'm your Gen AI Mentor. Ask me specifically about \
Python implementations for RAG, LangChain, or MLOps architectures.";

const MENTOR_APOLOGY: &str =
    "I'm having trouble connecting to the architecture review board (API Error). Try again.";
const INTERVIEWER_APOLOGY: &str = "Error processing response.";

fn apology_line(mode: ChatMode) -> &'static str {
    match mode {
        ChatMode::Mentor => MENTOR_APOLOGY,
        ChatMode::Interviewer => INTERVIEWER_APOLOGY,
    }
}

/// Reply request captured at send time. `history` is the transcript before
/// the new user turn; `epoch` discards replies that outlive a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCommand {
    pub epoch: u64,
    pub history: Vec<ConversationTurn>,
    pub message: String,
    pub mode: ChatMode,
}

pub struct ChatSurface {
    mode: ChatMode,
    turns: Vec<ConversationTurn>,
    busy: bool,
    epoch: u64,
}

impl ChatSurface {
    pub fn new(mode: ChatMode) -> Self {
        Self { mode, turns: Vec::new(), busy: false, epoch: 0 }
    }

    /// The floating mentor chat opens with a seeded greeting; the greeting
    /// counts as transcript history for subsequent calls.
    pub fn mentor() -> Self {
        let mut surface = Self::new(ChatMode::Mentor);
        surface.seed_assistant(MENTOR_GREETING);
        surface
    }

    /// Appends an assistant turn without a round trip (greetings, interview
    /// problem statements).
    pub fn seed_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn::assistant(content));
    }

    /// Appends the user turn synchronously and hands back the reply request.
    /// Blank input is ignored. A send while busy is not prevented; both
    /// replies land in order.
    pub fn send(&mut self, message: &str) -> Option<ChatCommand> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        let command = ChatCommand {
            epoch: self.epoch,
            history: self.turns.clone(),
            message: message.to_string(),
            mode: self.mode,
        };
        self.turns.push(ConversationTurn::user(message));
        self.busy = true;
        Some(command)
    }

    /// Completes a send: success appends the reply, failure appends the
    /// mode's apology line. Either way the surface is ready for more input.
    pub fn apply_reply(&mut self, epoch: u64, result: GenerationResult<String>) {
        if epoch != self.epoch {
            return;
        }
        let content = match result {
            Ok(reply) => reply,
            Err(_) => apology_line(self.mode).to_string(),
        };
        self.turns.push(ConversationTurn::assistant(content));
        self.busy = false;
    }

    /// Discards the transcript. In-flight replies from before the reset are
    /// dropped via the epoch bump.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.busy = false;
        self.epoch += 1;
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// Async driver for the floating mentor chat.
pub struct ChatSession<P> {
    surface: ChatSurface,
    service: Arc<ContentService<P>>,
}

impl<P: Provider> ChatSession<P> {
    pub fn new(service: Arc<ContentService<P>>) -> Self {
        Self { surface: ChatSurface::mentor(), service }
    }

    pub async fn send(&mut self, message: &str) {
        if let Some(command) = self.surface.send(message) {
            let result = self
                .service
                .chat_reply(&command.history, &command.message, command.mode)
                .await;
            self.surface.apply_reply(command.epoch, result);
        }
    }

    pub fn surface(&self) -> &ChatSurface {
        &self.surface
    }
}
