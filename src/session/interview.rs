//! The system-design interview modal: scenario selection, challenge setup,
//! and the interviewer chat, reset wholly on end-session.

use crate::curriculum::Scenario;
use crate::gateway::{ChatMode, ConversationTurn, DesignChallenge, GenerationResult, Provider};
use crate::service::ContentService;
use crate::session::chat::{ChatCommand, ChatSurface};
use crate::session::state::SurfaceState;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewCommand {
    StartChallenge { generation: u64, scenario_title: String },
    SendMessage(ChatCommand),
}

/// Pure machine for the modal. `setup` is `Idle` on the scenario-selection
/// screen and `Loaded` once the interview is underway.
pub struct InterviewModal {
    setup: SurfaceState<DesignChallenge>,
    chat: ChatSurface,
    generation: u64,
}

impl InterviewModal {
    pub fn new() -> Self {
        Self {
            setup: SurfaceState::Idle,
            chat: ChatSurface::new(ChatMode::Interviewer),
            generation: 0,
        }
    }

    /// Picking a scenario boots the challenge; one start per modal-open
    /// lifetime. Re-entry is only possible after `end_session` or a failure.
    pub fn start(&mut self, scenario: &Scenario) -> Option<InterviewCommand> {
        match self.setup {
            SurfaceState::Idle | SurfaceState::Failed(_) => {
                self.generation += 1;
                self.setup = SurfaceState::Loading;
                Some(InterviewCommand::StartChallenge {
                    generation: self.generation,
                    scenario_title: scenario.title.clone(),
                })
            }
            _ => None,
        }
    }

    /// On success, seeds the conversation with a synthesized opening turn
    /// built from the scenario text and initial question.
    pub fn apply_challenge(&mut self, generation: u64, result: GenerationResult<DesignChallenge>) {
        if generation != self.generation {
            return;
        }
        match result {
            Ok(challenge) => {
                self.chat.seed_assistant(format!(
                    "**Problem Statement:**\n{}\n\n{}",
                    challenge.scenario, challenge.initial_question
                ));
                self.setup = SurfaceState::Loaded(challenge);
            }
            Err(e) => self.setup = SurfaceState::Failed(e.to_string()),
        }
    }

    /// Candidate input is only accepted once the interview is underway.
    pub fn send(&mut self, message: &str) -> Option<InterviewCommand> {
        if !self.setup.is_loaded() {
            return None;
        }
        self.chat.send(message).map(InterviewCommand::SendMessage)
    }

    pub fn apply_reply(&mut self, epoch: u64, result: GenerationResult<String>) {
        self.chat.apply_reply(epoch, result);
    }

    /// Back to scenario selection, transcript discarded. No resume.
    pub fn end_session(&mut self) {
        self.setup = SurfaceState::Idle;
        self.chat.reset();
    }

    pub fn setup(&self) -> &SurfaceState<DesignChallenge> {
        &self.setup
    }

    pub fn challenge(&self) -> Option<&DesignChallenge> {
        self.setup.loaded()
    }

    pub fn transcript(&self) -> &[ConversationTurn] {
        self.chat.turns()
    }

    pub fn is_busy(&self) -> bool {
        self.chat.is_busy()
    }
}

impl Default for InterviewModal {
    fn default() -> Self {
        Self::new()
    }
}

/// Async driver for the interview modal.
pub struct InterviewSession<P> {
    modal: InterviewModal,
    service: Arc<ContentService<P>>,
}

impl<P: Provider> InterviewSession<P> {
    pub fn new(service: Arc<ContentService<P>>) -> Self {
        Self { modal: InterviewModal::new(), service }
    }

    pub async fn start(&mut self, scenario: &Scenario) {
        if let Some(command) = self.modal.start(scenario) {
            self.run(command).await;
        }
    }

    pub async fn send(&mut self, message: &str) {
        if let Some(command) = self.modal.send(message) {
            self.run(command).await;
        }
    }

    pub fn end_session(&mut self) {
        self.modal.end_session();
    }

    async fn run(&mut self, command: InterviewCommand) {
        match command {
            InterviewCommand::StartChallenge { generation, scenario_title } => {
                let result = self.service.start_design_challenge(&scenario_title).await;
                self.modal.apply_challenge(generation, result);
            }
            InterviewCommand::SendMessage(chat) => {
                let result = self
                    .service
                    .chat_reply(&chat.history, &chat.message, chat.mode)
                    .await;
                self.modal.apply_reply(chat.epoch, result);
            }
        }
    }

    pub fn modal(&self) -> &InterviewModal {
        &self.modal
    }
}
