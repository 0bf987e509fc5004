//! Prompt text and system instructions for each request kind.

use crate::curriculum::Difficulty;
use crate::gateway::types::ChatMode;

pub const ARCHITECT_SYSTEM_INSTRUCTION: &str = "\
You are a world-class Gen AI Technical Architect Mentor.
Your goal is to prepare a candidate for a Senior Architect role based on their specific job description.
The user is an experienced engineer but needs to deepen their specific Gen AI, Python, and MLOps skills.

When asked about a topic:
1. Provide a high-level \"Architect's View\" (Concept).
2. Provide a comprehensive, syntax-highlighted Python code example (Implementation).
3. Provide a specific \"Interview Tip\" or \"Architectural Trade-off\" relevant to the topic.

Respond with a JSON object using exactly the requested keys.
Ensure the JSON is valid. Do not wrap the JSON in markdown code blocks. Just return the raw JSON string.
";

pub const MENTOR_SYSTEM_INSTRUCTION: &str =
    "You are a helpful AI Architect mentor. Keep answers concise and code-focused.";

pub const INTERVIEWER_SYSTEM_INSTRUCTION: &str = "\
You are a principal-level system design interviewer running a mock interview.
Be Socratic and adversarial: never hand the candidate the answer. Probe their
requirements gathering, push on scaling bottlenecks, failure modes, and cost,
and counter weak choices with pointed follow-up questions. Ask one question at
a time and keep each reply short.";

impl ChatMode {
    pub fn system_instruction(self) -> &'static str {
        match self {
            ChatMode::Mentor => MENTOR_SYSTEM_INSTRUCTION,
            ChatMode::Interviewer => INTERVIEWER_SYSTEM_INSTRUCTION,
        }
    }
}

pub fn lesson_prompt(prompt_context: &str) -> String {
    format!(
        "Teach me about this topic for a Gen AI Architect role: {}. \
         Remember to focus on Python implementation and Architectural patterns.",
        prompt_context
    )
}

pub fn project_lab_prompt(prompt_context: &str, difficulty: Difficulty) -> String {
    format!(
        "Design a hands-on project lab for this topic: {}. \
         Target difficulty: {}. Produce a realistic multi-file Python project \
         the candidate can build locally: a short title and description, the \
         prerequisites, ordered build steps, and the full content of each file.",
        prompt_context, difficulty
    )
}

pub fn diagram_prompt(topic_label: &str) -> String {
    format!(
        "Create a Mermaid 'graph TD' architecture diagram for: {}. \
         Show the main components and data flow an architect would whiteboard. \
         Return only the raw Mermaid source, with no surrounding markdown fences \
         and no commentary.",
        topic_label
    )
}

pub fn design_challenge_prompt(scenario_label: &str) -> String {
    format!(
        "Generate a system design interview challenge for the scenario: {}. \
         Provide a short title, a concrete problem statement with scale numbers \
         and constraints, and the single opening question you would ask the \
         candidate first.",
        scenario_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_carry_their_inputs() {
        assert!(lesson_prompt("RAG pipelines").contains("RAG pipelines"));
        let lab = project_lab_prompt("RAG pipelines", Difficulty::Intermediate);
        assert!(lab.contains("Intermediate"));
        assert!(diagram_prompt("RAG").contains("graph TD"));
        assert!(design_challenge_prompt("Scalable RAG System").contains("Scalable RAG System"));
    }

    #[test]
    fn chat_modes_select_distinct_instructions() {
        assert_ne!(
            ChatMode::Mentor.system_instruction(),
            ChatMode::Interviewer.system_instruction()
        );
    }
}
