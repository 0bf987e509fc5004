//! The lesson pane: theory, lab, and diagram tabs for the selected topic.
//!
//! `LessonPane` is the pure machine: every action is an explicit function
//! from the current state to a new state plus an optional fetch command, and
//! every completion is applied through a generation check so a slow response
//! for a previously selected topic is discarded instead of rendered.
//! `LessonSession` is the async driver that executes commands against the
//! cache-wrapped service.

use crate::curriculum::{Difficulty, Topic};
use crate::gateway::{DiagramSource, GeneratedLesson, GenerationResult, ProjectLab, Provider};
use crate::service::ContentService;
use crate::session::state::SurfaceState;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Theory,
    Lab,
    Diagram,
}

/// Side effect requested by a pane action; executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonCommand {
    FetchLesson {
        generation: u64,
        prompt_context: String,
    },
    FetchLab {
        generation: u64,
        prompt_context: String,
        difficulty: Difficulty,
        regenerate: bool,
    },
    FetchDiagram {
        generation: u64,
        topic_label: String,
    },
}

#[derive(Default)]
pub struct LessonPane {
    topic: Option<Topic>,
    active_tab: Option<Tab>,
    difficulty: Option<Difficulty>,
    theory: SurfaceState<GeneratedLesson>,
    lab: SurfaceState<ProjectLab>,
    diagram: SurfaceState<DiagramSource>,
    generation: u64,
}

impl LessonPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting a topic resets every tab, then auto-loads theory.
    pub fn select_topic(&mut self, topic: Topic) -> LessonCommand {
        self.generation += 1;
        self.difficulty = Some(topic.difficulty);
        self.active_tab = Some(Tab::Theory);
        self.theory = SurfaceState::Loading;
        self.lab = SurfaceState::Idle;
        self.diagram = SurfaceState::Idle;
        let command = LessonCommand::FetchLesson {
            generation: self.generation,
            prompt_context: topic.prompt_context.clone(),
        };
        self.topic = Some(topic);
        command
    }

    /// Switching to an unloaded tab starts its fetch; a loaded or already
    /// loading tab is a pure state read.
    pub fn select_tab(&mut self, tab: Tab) -> Option<LessonCommand> {
        let topic = self.topic.as_ref()?;
        self.active_tab = Some(tab);
        match tab {
            Tab::Theory if self.theory.is_idle() => {
                self.theory = SurfaceState::Loading;
                Some(LessonCommand::FetchLesson {
                    generation: self.generation,
                    prompt_context: topic.prompt_context.clone(),
                })
            }
            Tab::Lab if self.lab.is_idle() => {
                self.lab = SurfaceState::Loading;
                Some(LessonCommand::FetchLab {
                    generation: self.generation,
                    prompt_context: topic.prompt_context.clone(),
                    difficulty: self.current_difficulty(),
                    regenerate: false,
                })
            }
            Tab::Diagram if self.diagram.is_idle() => {
                self.diagram = SurfaceState::Loading;
                Some(LessonCommand::FetchDiagram {
                    generation: self.generation,
                    topic_label: topic.title.clone(),
                })
            }
            _ => None,
        }
    }

    /// Changing lab difficulty re-keys the lab content. If the lab tab is
    /// active it reloads immediately; otherwise the tab falls back to `Idle`
    /// and loads on the next visit.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Option<LessonCommand> {
        if self.current_difficulty() == difficulty && self.topic.is_some() {
            return None;
        }
        self.difficulty = Some(difficulty);
        let topic = self.topic.as_ref()?;
        if self.active_tab == Some(Tab::Lab) {
            self.lab = SurfaceState::Loading;
            Some(LessonCommand::FetchLab {
                generation: self.generation,
                prompt_context: topic.prompt_context.clone(),
                difficulty,
                regenerate: false,
            })
        } else {
            self.lab = SurfaceState::Idle;
            None
        }
    }

    /// Re-issues the active tab's request after a failure.
    pub fn retry(&mut self) -> Option<LessonCommand> {
        let topic = self.topic.as_ref()?;
        match self.active_tab? {
            Tab::Theory if self.theory.failure().is_some() => {
                self.theory = SurfaceState::Loading;
                Some(LessonCommand::FetchLesson {
                    generation: self.generation,
                    prompt_context: topic.prompt_context.clone(),
                })
            }
            Tab::Lab if self.lab.failure().is_some() => {
                self.lab = SurfaceState::Loading;
                Some(LessonCommand::FetchLab {
                    generation: self.generation,
                    prompt_context: topic.prompt_context.clone(),
                    difficulty: self.current_difficulty(),
                    regenerate: false,
                })
            }
            Tab::Diagram if self.diagram.failure().is_some() => {
                self.diagram = SurfaceState::Loading;
                Some(LessonCommand::FetchDiagram {
                    generation: self.generation,
                    topic_label: topic.title.clone(),
                })
            }
            _ => None,
        }
    }

    /// Forces a fresh lab even though one is loaded; the cache entry is
    /// overwritten on success. Only valid from `Loaded`.
    pub fn regenerate_lab(&mut self) -> Option<LessonCommand> {
        let topic = self.topic.as_ref()?;
        if !self.lab.is_loaded() {
            return None;
        }
        self.lab = SurfaceState::Loading;
        Some(LessonCommand::FetchLab {
            generation: self.generation,
            prompt_context: topic.prompt_context.clone(),
            difficulty: self.current_difficulty(),
            regenerate: true,
        })
    }

    pub fn apply_lesson(&mut self, generation: u64, result: GenerationResult<GeneratedLesson>) {
        if !self.accepts(generation) {
            return;
        }
        self.theory = match result {
            Ok(lesson) => SurfaceState::Loaded(lesson),
            Err(e) => SurfaceState::Failed(e.to_string()),
        };
    }

    pub fn apply_lab(&mut self, generation: u64, result: GenerationResult<ProjectLab>) {
        if !self.accepts(generation) {
            return;
        }
        self.lab = match result {
            Ok(lab) => SurfaceState::Loaded(lab),
            Err(e) => SurfaceState::Failed(e.to_string()),
        };
    }

    pub fn apply_diagram(&mut self, generation: u64, result: GenerationResult<DiagramSource>) {
        if !self.accepts(generation) {
            return;
        }
        self.diagram = match result {
            Ok(diagram) => SurfaceState::Loaded(diagram),
            Err(e) => SurfaceState::Failed(e.to_string()),
        };
    }

    fn accepts(&self, generation: u64) -> bool {
        let current = generation == self.generation;
        if !current {
            debug!(stale = generation, current = self.generation, "discarding stale completion");
        }
        current
    }

    fn current_difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or(Difficulty::Basic)
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.active_tab
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn theory(&self) -> &SurfaceState<GeneratedLesson> {
        &self.theory
    }

    pub fn lab(&self) -> &SurfaceState<ProjectLab> {
        &self.lab
    }

    pub fn diagram(&self) -> &SurfaceState<DiagramSource> {
        &self.diagram
    }
}

/// Async driver: runs pane commands against the cache-wrapped gateway and
/// feeds completions back through the generation check.
pub struct LessonSession<P> {
    pane: LessonPane,
    service: Arc<ContentService<P>>,
}

impl<P: Provider> LessonSession<P> {
    pub fn new(service: Arc<ContentService<P>>) -> Self {
        Self { pane: LessonPane::new(), service }
    }

    pub async fn select_topic(&mut self, topic: Topic) {
        let command = self.pane.select_topic(topic);
        self.run(command).await;
    }

    pub async fn select_tab(&mut self, tab: Tab) {
        if let Some(command) = self.pane.select_tab(tab) {
            self.run(command).await;
        }
    }

    pub async fn set_difficulty(&mut self, difficulty: Difficulty) {
        if let Some(command) = self.pane.set_difficulty(difficulty) {
            self.run(command).await;
        }
    }

    pub async fn retry(&mut self) {
        if let Some(command) = self.pane.retry() {
            self.run(command).await;
        }
    }

    pub async fn regenerate_lab(&mut self) {
        if let Some(command) = self.pane.regenerate_lab() {
            self.run(command).await;
        }
    }

    async fn run(&mut self, command: LessonCommand) {
        match command {
            LessonCommand::FetchLesson { generation, prompt_context } => {
                let result = self.service.lesson(&prompt_context).await;
                self.pane.apply_lesson(generation, result);
            }
            LessonCommand::FetchLab { generation, prompt_context, difficulty, regenerate } => {
                let result = self.service.project_lab(&prompt_context, difficulty, regenerate).await;
                self.pane.apply_lab(generation, result);
            }
            LessonCommand::FetchDiagram { generation, topic_label } => {
                let result = self.service.diagram(&topic_label).await;
                self.pane.apply_diagram(generation, result);
            }
        }
    }

    pub fn pane(&self) -> &LessonPane {
        &self.pane
    }
}
