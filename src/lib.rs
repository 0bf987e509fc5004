//! # archprep
//!
//! The engine behind a Gen AI Architect training app: a generation gateway
//! over an external model service, a process-lifetime response cache, and
//! per-surface session state machines for the lesson pane, mentor chat, and
//! mock system-design interview.
//!
//! ## Architecture
//!
//! ```text
//! UI events → session (state machines) → service (caches) → gateway → provider (HTTP)
//! ```
//!
//! Surfaces hold independent state, so one surface loading never blocks
//! another; all content requests funnel through the cache so identical
//! inputs hit the backend at most once per process.

pub mod cache;
pub mod config;
pub mod curriculum;
pub mod gateway;
pub mod service;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{validate_environment, Config, ConfigError};
pub use curriculum::{Curriculum, Difficulty, Module, Scenario, Topic};
pub use gateway::{
    ChatMode, ConversationTurn, DesignChallenge, DiagramSource, Gateway, GeminiProvider,
    GeneratedLesson, GenerationError, GenerationResult, ProjectFile, ProjectLab, Provider, Role,
};
pub use service::ContentService;
pub use session::{
    ChatSession, ChatSurface, InterviewSession, LessonSession, SurfaceState, Tab,
};

use std::sync::Arc;

/// Everything one browser-session-equivalent process needs: the curriculum,
/// the shared service, and one driver per surface.
pub struct App<P> {
    pub curriculum: Curriculum,
    pub service: Arc<ContentService<P>>,
    pub lesson: LessonSession<P>,
    pub mentor: ChatSession<P>,
    pub interview: InterviewSession<P>,
}

impl<P: Provider> App<P> {
    pub fn new(provider: P) -> anyhow::Result<Self> {
        let curriculum = Curriculum::load()?;
        let service = Arc::new(ContentService::new(Gateway::new(provider)));
        Ok(Self {
            curriculum,
            lesson: LessonSession::new(service.clone()),
            mentor: ChatSession::new(service.clone()),
            interview: InterviewSession::new(service.clone()),
            service,
        })
    }
}

impl App<GeminiProvider> {
    /// Wires the real HTTP provider from the environment. Fails fast when
    /// the credential is missing rather than at the first call.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::from_env()?;
        let provider = GeminiProvider::new(config)?;
        Self::new(provider)
    }
}
