use serde::{Deserialize, Serialize};

use crate::types::Skill;

/// One entry in the terminal scrollback.
///
/// `Skills` carries the raw list so the renderer can group and draw bars
/// instead of receiving pre-formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Line {
    /// Echo of a submitted command, shown after the prompt.
    Command { prompt: String, command: String },
    Text { value: String },
    Error { value: String },
    Skills { data: Vec<Skill> },
}

impl Line {
    pub fn text(value: impl Into<String>) -> Self {
        Line::Text {
            value: value.into(),
        }
    }

    pub fn error(value: impl Into<String>) -> Self {
        Line::Error {
            value: value.into(),
        }
    }

    pub fn command(prompt: impl Into<String>, command: impl Into<String>) -> Self {
        Line::Command {
            prompt: prompt.into(),
            command: command.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Line::Error { .. })
    }

    /// Plain text payload of `Text`/`Error` lines.
    pub fn value(&self) -> Option<&str> {
        match self {
            Line::Text { value } | Line::Error { value } => Some(value),
            _ => None,
        }
    }
}
