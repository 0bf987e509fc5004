//! Test doubles shared across module tests.

use crate::gateway::error::{GenerationError, GenerationResult};
use crate::gateway::provider::{GenerateRequest, Provider};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A provider that replays a scripted queue of outcomes and records every
/// request it receives, so call counts and prompts can be asserted offline.
#[derive(Default)]
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<GenerationResult<String>>>,
    calls: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_err(&self, error: GenerationError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|r| r.prompt.clone()).collect()
    }

    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    async fn generate(&self, request: GenerateRequest) -> GenerationResult<String> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::transport("script exhausted")))
    }
}

pub fn lesson_json() -> String {
    r#"{"explanation":"Concept overview","code":"print('hi')","interviewTip":"Mention trade-offs"}"#
        .to_string()
}

pub fn lab_json(title: &str) -> String {
    format!(
        r#"{{"title":"{}","description":"Build it end to end","prerequisites":["python 3.11"],"steps":["scaffold","implement","test"],"files":[{{"name":"main.py","language":"python","content":"print('lab')"}}]}}"#,
        title
    )
}

pub fn challenge_json() -> String {
    r#"{"title":"Scalable RAG System","scenario":"Design retrieval for 10M docs","initialQuestion":"What are your availability targets?"}"#
        .to_string()
}
