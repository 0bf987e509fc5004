//! Static curriculum data: modules, topics, and interview scenarios.
//!
//! The catalog is embedded at compile time and parsed once; topics carry the
//! exact `prompt_context` strings fed to the generation backend.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Basic => write!(f, "Basic"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub prompt_context: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub topics: Vec<Topic>,
}

/// One selectable design-interview scenario.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub id: String,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Curriculum {
    pub modules: Vec<Module>,
    pub scenarios: Vec<Scenario>,
}

impl Curriculum {
    /// Parses the embedded catalog.
    pub fn load() -> Result<Self> {
        let raw = include_str!("./curriculum.toml");
        toml::from_str(raw).context("embedded curriculum.toml is malformed")
    }

    pub fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.modules
            .iter()
            .flat_map(|m| m.topics.iter())
            .find(|t| t.id == topic_id)
    }

    pub fn scenario(&self, scenario_id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == scenario_id)
    }

    pub fn topic_count(&self) -> usize {
        self.modules.iter().map(|m| m.topics.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let curriculum = Curriculum::load().unwrap();
        assert_eq!(curriculum.modules.len(), 4);
        assert_eq!(curriculum.topic_count(), 12);
        assert_eq!(curriculum.scenarios.len(), 4);
    }

    #[test]
    fn topic_lookup_by_id() {
        let curriculum = Curriculum::load().unwrap();
        let rag = curriculum.topic("rag_impl").unwrap();
        assert_eq!(rag.title, "RAG (Retrieval Augmented Generation)");
        assert_eq!(rag.difficulty, Difficulty::Intermediate);
        assert!(rag.prompt_context.contains("RAG pipeline"));
        assert!(curriculum.topic("nope").is_none());
    }

    #[test]
    fn scenario_lookup_by_id() {
        let curriculum = Curriculum::load().unwrap();
        assert_eq!(
            curriculum.scenario("rag_scale").unwrap().title,
            "Scalable RAG System"
        );
    }
}
