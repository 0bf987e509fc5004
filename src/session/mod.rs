//! Session State Machines: one deterministic lifecycle per UI surface.
//!
//! Each surface exposes a pure machine (actions return commands, completions
//! are applied explicitly) and an async driver that runs commands against the
//! cache-wrapped service. Surfaces are independent: one surface loading never
//! locks another.

pub mod chat;
pub mod interview;
pub mod lesson;
pub mod state;

pub use chat::{ChatCommand, ChatSession, ChatSurface, MENTOR_GREETING};
pub use interview::{InterviewCommand, InterviewModal, InterviewSession};
pub use lesson::{LessonCommand, LessonPane, LessonSession, Tab};
pub use state::SurfaceState;
