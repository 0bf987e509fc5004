//! Generation Gateway: translates domain-level requests into backend calls
//! and normalizes every outcome into typed data or one uniform error.
//!
//! The gateway is stateless between calls; caching lives one layer up in
//! [`crate::service`].

pub mod decode;
pub mod error;
pub mod prompts;
pub mod provider;
pub mod schema;
pub mod types;

pub use error::{GenerationError, GenerationResult};
pub use provider::{GeminiProvider, GenerateRequest, Provider};
pub use types::{
    ChatMode, ConversationTurn, DesignChallenge, DiagramSource, GeneratedLesson, ProjectFile,
    ProjectLab, Role,
};

use crate::curriculum::Difficulty;
use tracing::{debug, warn};
use uuid::Uuid;

pub struct Gateway<P> {
    provider: P,
}

impl<P: Provider> Gateway<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Generates lesson content for one topic's prompt context.
    pub async fn request_lesson(&self, prompt_context: &str) -> GenerationResult<GeneratedLesson> {
        let request = GenerateRequest::structured(
            prompts::lesson_prompt(prompt_context),
            prompts::ARCHITECT_SYSTEM_INSTRUCTION,
            schema::lesson_schema(),
        );
        let raw = self.call("lesson", request).await?;
        decode::decode_lesson(&raw)
    }

    /// Generates a hands-on lab for one topic at a given difficulty.
    pub async fn request_project_lab(
        &self,
        prompt_context: &str,
        difficulty: Difficulty,
    ) -> GenerationResult<ProjectLab> {
        let request = GenerateRequest::structured(
            prompts::project_lab_prompt(prompt_context, difficulty),
            prompts::ARCHITECT_SYSTEM_INSTRUCTION,
            schema::project_lab_schema(),
        );
        let raw = self.call("project_lab", request).await?;
        decode::decode_project_lab(&raw)
    }

    /// Generates diagram source for a topic. An empty payload degrades to a
    /// visible placeholder node instead of failing the call.
    pub async fn request_diagram(&self, topic_label: &str) -> GenerationResult<DiagramSource> {
        let request = GenerateRequest::freeform(prompts::diagram_prompt(topic_label), None);
        match self.call("diagram", request).await {
            Ok(raw) => Ok(decode::decode_diagram(&raw, topic_label)),
            Err(GenerationError::Empty) => Ok(DiagramSource::placeholder(topic_label)),
            Err(e) => Err(e),
        }
    }

    /// One conversational reply, conditioned on the full prior transcript.
    pub async fn request_chat_reply(
        &self,
        history: &[ConversationTurn],
        new_message: &str,
        mode: ChatMode,
    ) -> GenerationResult<String> {
        let request =
            GenerateRequest::freeform(new_message.to_string(), Some(mode.system_instruction()))
                .with_history(history.to_vec());
        self.call("chat_reply", request).await
    }

    /// Opens a fresh mock-interview challenge for a scenario. Never cached;
    /// regenerating intentionally produces a new scenario.
    pub async fn start_design_challenge(
        &self,
        scenario_label: &str,
    ) -> GenerationResult<DesignChallenge> {
        let request = GenerateRequest::structured(
            prompts::design_challenge_prompt(scenario_label),
            prompts::INTERVIEWER_SYSTEM_INSTRUCTION,
            schema::design_challenge_schema(),
        );
        let raw = self.call("design_challenge", request).await?;
        decode::decode_design_challenge(&raw)
    }

    async fn call(&self, kind: &'static str, request: GenerateRequest) -> GenerationResult<String> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, kind, "issuing generation request");
        match self.provider.generate(request).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(%request_id, kind, error = %e, "generation request failed");
                Err(e)
            }
        }
    }
}
