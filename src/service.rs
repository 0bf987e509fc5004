//! Cache-wrapped gateway: consult the cache, call upstream on a miss,
//! populate on success. Owns the cache objects; nothing here is a global.

use crate::cache::{self, ResponseCache};
use crate::curriculum::Difficulty;
use crate::gateway::{
    ChatMode, ConversationTurn, DesignChallenge, DiagramSource, Gateway, GeneratedLesson,
    GenerationResult, ProjectLab, Provider,
};
use tracing::debug;

pub struct ContentService<P> {
    gateway: Gateway<P>,
    lessons: ResponseCache<GeneratedLesson>,
    labs: ResponseCache<ProjectLab>,
    diagrams: ResponseCache<DiagramSource>,
}

impl<P: Provider> ContentService<P> {
    pub fn new(gateway: Gateway<P>) -> Self {
        Self {
            gateway,
            lessons: ResponseCache::new("lesson"),
            labs: ResponseCache::new("lab"),
            diagrams: ResponseCache::new("diagram"),
        }
    }

    /// Lesson content, keyed by exact prompt context.
    pub async fn lesson(&self, prompt_context: &str) -> GenerationResult<GeneratedLesson> {
        let key = cache::lesson_key(prompt_context);
        if let Some(cached) = self.lessons.get(&key) {
            return Ok(cached);
        }
        let lesson = self.gateway.request_lesson(prompt_context).await?;
        self.lessons.put(key, lesson.clone());
        Ok(lesson)
    }

    /// Project lab, keyed by (prompt context, difficulty). `regenerate`
    /// bypasses the lookup but still overwrites the entry on success.
    pub async fn project_lab(
        &self,
        prompt_context: &str,
        difficulty: Difficulty,
        regenerate: bool,
    ) -> GenerationResult<ProjectLab> {
        let key = cache::lab_key(prompt_context, difficulty);
        if !regenerate {
            if let Some(cached) = self.labs.get(&key) {
                return Ok(cached);
            }
        } else {
            debug!(key = %key, "regenerate requested, bypassing lab cache");
        }
        let lab = self.gateway.request_project_lab(prompt_context, difficulty).await?;
        self.labs.put(key, lab.clone());
        Ok(lab)
    }

    /// Diagram source, keyed by topic label.
    pub async fn diagram(&self, topic_label: &str) -> GenerationResult<DiagramSource> {
        let key = cache::diagram_key(topic_label);
        if let Some(cached) = self.diagrams.get(&key) {
            return Ok(cached);
        }
        let diagram = self.gateway.request_diagram(topic_label).await?;
        self.diagrams.put(key, diagram.clone());
        Ok(diagram)
    }

    /// Chat replies are never cached: every turn depends on the transcript.
    pub async fn chat_reply(
        &self,
        history: &[ConversationTurn],
        new_message: &str,
        mode: ChatMode,
    ) -> GenerationResult<String> {
        self.gateway.request_chat_reply(history, new_message, mode).await
    }

    /// Design challenges are never cached: reopening a scenario is meant to
    /// produce a fresh interview.
    pub async fn start_design_challenge(
        &self,
        scenario_label: &str,
    ) -> GenerationResult<DesignChallenge> {
        self.gateway.start_design_challenge(scenario_label).await
    }

    /// Empties all three caches. Test isolation and explicit resets only.
    pub fn clear_caches(&self) {
        self.lessons.clear();
        self.labs.clear();
        self.diagrams.clear();
    }

    pub fn cached_lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn cached_lab_count(&self) -> usize {
        self.labs.len()
    }

    pub fn cached_diagram_count(&self) -> usize {
        self.diagrams.len()
    }
}
