//! Prompt templates, response schemas and sampling settings.

use serde_json::{json, Value};

pub const DEFAULT_VALIDATION_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_DECOMPOSITION_MODEL: &str = "gemini-2.5-pro";

/// Low temperature: the verdict should be stable for the same text.
pub const VALIDATION_TEMPERATURE: f32 = 0.1;
pub const DECOMPOSITION_TEMPERATURE: f32 = 0.5;

pub fn validation_prompt(task: &str) -> String {
    format!(
        "Examine the following text and decide whether it describes a task that can be \
planned and broken down into sub-steps. Do not break the task down, only analyze it.
- Good tasks: \"clean the garage\", \"plan a trip\", \"learn React\".
- Not tasks: \"what is the capital of France?\", \"I like pizza\", \"what is 2+2?\".

The text to examine: \"{task}\""
    )
}

pub fn decomposition_prompt(task: &str) -> String {
    format!(
        "Break the following main task down into small sub-tasks. Each sub-task must be a \
specific action that can be completed in about 2 minutes. The sub-tasks must be in the \
logical order that leads to completing the main task.

The main task is: \"{task}\""
    )
}

/// `{ isPlannable: boolean, reason: string }`, both required.
pub fn validation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isPlannable": {
                "type": "BOOLEAN",
                "description": "Whether the text is a task that can be planned and broken into steps.",
            },
            "reason": {
                "type": "STRING",
                "description": "Short reason why the text is not a plannable task (if relevant).",
            },
        },
        "required": ["isPlannable", "reason"],
    })
}

/// `[{ task: string }]`, `task` required.
pub fn decomposition_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "task": {
                    "type": "STRING",
                    "description": "A single, actionable sub-task.",
                },
            },
            "required": ["task"],
        },
    })
}
