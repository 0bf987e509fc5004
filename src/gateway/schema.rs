//! Structured-output schema descriptors handed to the backend.
//!
//! The backend enforces these provider-side; [`super::decode`] re-validates
//! every field independently before a domain record is constructed.

use serde_json::{json, Value};

pub fn lesson_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "explanation": { "type": "STRING" },
            "code": { "type": "STRING" },
            "interviewTip": { "type": "STRING" }
        },
        "required": ["explanation", "code", "interviewTip"]
    })
}

pub fn project_lab_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "prerequisites": { "type": "ARRAY", "items": { "type": "STRING" } },
            "steps": { "type": "ARRAY", "items": { "type": "STRING" } },
            "files": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "language": { "type": "STRING" },
                        "content": { "type": "STRING" }
                    },
                    "required": ["name", "language", "content"]
                }
            }
        },
        "required": ["title", "description", "prerequisites", "steps", "files"]
    })
}

pub fn design_challenge_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "scenario": { "type": "STRING" },
            "initialQuestion": { "type": "STRING" }
        },
        "required": ["title", "scenario", "initialQuestion"]
    })
}
