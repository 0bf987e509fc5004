//! Strict decoding of backend payloads into domain records.
//!
//! Every required field is checked for presence and type here; provider-side
//! schema enforcement is not trusted on its own.

use crate::gateway::error::{GenerationError, GenerationResult};
use crate::gateway::types::{DesignChallenge, DiagramSource, GeneratedLesson, ProjectFile, ProjectLab};
use serde_json::{Map, Value};

/// Removes one layer of markdown code fencing, if present.
/// Handles both ```lang and bare ``` markers.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    if let Ok(re) = regex::Regex::new(r"(?s)^```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)\r?\n?```$") {
        if let Some(caps) = re.captures(trimmed) {
            return caps[1].trim().to_string();
        }
    }
    trimmed.to_string()
}

fn parse_object(raw: &str) -> GenerationResult<Map<String, Value>> {
    let cleaned = strip_code_fences(raw);
    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|e| GenerationError::schema(format!("payload is not valid JSON: {}", e)))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(GenerationError::schema(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required_str(obj: &Map<String, Value>, key: &str) -> GenerationResult<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(GenerationError::schema(format!(
            "field '{}' must be a string, got {}",
            key,
            json_type_name(other)
        ))),
        None => Err(GenerationError::schema(format!("missing required field '{}'", key))),
    }
}

fn required_str_array(obj: &Map<String, Value>, key: &str) -> GenerationResult<Vec<String>> {
    let items = match obj.get(key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(GenerationError::schema(format!(
                "field '{}' must be an array, got {}",
                key,
                json_type_name(other)
            )))
        }
        None => return Err(GenerationError::schema(format!("missing required field '{}'", key))),
    };
    items
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::String(s) => Ok(s.clone()),
            other => Err(GenerationError::schema(format!(
                "field '{}[{}]' must be a string, got {}",
                key,
                i,
                json_type_name(other)
            ))),
        })
        .collect()
}

pub fn decode_lesson(raw: &str) -> GenerationResult<GeneratedLesson> {
    let obj = parse_object(raw)?;
    let lesson = GeneratedLesson {
        explanation: required_str(&obj, "explanation")?,
        code: required_str(&obj, "code")?,
        interview_tip: required_str(&obj, "interviewTip")?,
    };
    if lesson.explanation.trim().is_empty() || lesson.code.trim().is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(lesson)
}

pub fn decode_project_lab(raw: &str) -> GenerationResult<ProjectLab> {
    let obj = parse_object(raw)?;
    let files = match obj.get("files") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::Object(file) => Ok(ProjectFile {
                    name: required_str(file, "name")?,
                    language: required_str(file, "language")?,
                    content: required_str(file, "content")?,
                }),
                other => Err(GenerationError::schema(format!(
                    "field 'files[{}]' must be an object, got {}",
                    i,
                    json_type_name(other)
                ))),
            })
            .collect::<GenerationResult<Vec<_>>>()?,
        Some(other) => {
            return Err(GenerationError::schema(format!(
                "field 'files' must be an array, got {}",
                json_type_name(other)
            )))
        }
        None => return Err(GenerationError::schema("missing required field 'files'")),
    };

    let lab = ProjectLab {
        title: required_str(&obj, "title")?,
        description: required_str(&obj, "description")?,
        prerequisites: required_str_array(&obj, "prerequisites")?,
        steps: required_str_array(&obj, "steps")?,
        files,
    };
    if lab.title.trim().is_empty() || lab.files.is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(lab)
}

pub fn decode_design_challenge(raw: &str) -> GenerationResult<DesignChallenge> {
    let obj = parse_object(raw)?;
    let challenge = DesignChallenge {
        title: required_str(&obj, "title")?,
        scenario: required_str(&obj, "scenario")?,
        initial_question: required_str(&obj, "initialQuestion")?,
    };
    if challenge.scenario.trim().is_empty() || challenge.initial_question.trim().is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(challenge)
}

/// Diagram payloads degrade instead of failing: an empty body becomes a
/// visibly-marked placeholder node.
pub fn decode_diagram(raw: &str, topic_label: &str) -> DiagramSource {
    let cleaned = strip_code_fences(raw);
    if cleaned.trim().is_empty() {
        DiagramSource::placeholder(topic_label)
    } else {
        DiagramSource(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fences_stripped_with_and_without_language() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\ngraph TD\n  a --> b\n```"), "graph TD\n  a --> b");
        assert_eq!(strip_code_fences("plain text"), "plain text");
    }

    #[test]
    fn lesson_decodes_and_tolerates_fencing() {
        let raw = "```json\n{\"explanation\":\"E\",\"code\":\"print(1)\",\"interviewTip\":\"T\"}\n```";
        let lesson = decode_lesson(raw).unwrap();
        assert_eq!(lesson.interview_tip, "T");
    }

    #[test]
    fn lesson_missing_field_is_schema_failure() {
        let err = decode_lesson("{\"explanation\":\"E\",\"code\":\"c\"}").unwrap_err();
        assert!(matches!(err, GenerationError::Schema { .. }));
        assert!(err.to_string().contains("interviewTip"));
    }

    #[test]
    fn lesson_wrong_type_is_schema_failure() {
        let err =
            decode_lesson("{\"explanation\":\"E\",\"code\":7,\"interviewTip\":\"T\"}").unwrap_err();
        assert!(err.to_string().contains("'code' must be a string"));
    }

    #[test]
    fn blank_lesson_is_empty_failure() {
        let raw = "{\"explanation\":\"  \",\"code\":\"\",\"interviewTip\":\"T\"}";
        assert_eq!(decode_lesson(raw).unwrap_err(), GenerationError::Empty);
    }

    #[test]
    fn lab_decodes_nested_files() {
        let raw = r#"{
            "title": "Build a RAG service",
            "description": "d",
            "prerequisites": ["python 3.11"],
            "steps": ["init repo", "write ingester"],
            "files": [{"name": "main.py", "language": "python", "content": "print()"}]
        }"#;
        let lab = decode_project_lab(raw).unwrap();
        assert_eq!(lab.steps.len(), 2);
        assert_eq!(lab.files[0].name, "main.py");
    }

    #[test]
    fn lab_bad_file_entry_is_schema_failure() {
        let raw = r#"{"title":"t","description":"d","prerequisites":[],"steps":[],"files":["oops"]}"#;
        let err = decode_project_lab(raw).unwrap_err();
        assert!(err.to_string().contains("files[0]"));
    }

    #[test]
    fn non_object_payload_is_schema_failure() {
        let err = decode_lesson("[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn empty_diagram_becomes_placeholder() {
        let diagram = decode_diagram("```mermaid\n\n```", "RAG");
        assert!(diagram.as_str().contains("Diagram unavailable: RAG"));

        let ok = decode_diagram("```mermaid\ngraph TD\n  a --> b\n```", "RAG");
        assert_eq!(ok.as_str(), "graph TD\n  a --> b");
    }
}
