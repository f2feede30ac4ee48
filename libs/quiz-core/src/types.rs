//! Core types for the quiz viewer.

use serde::{Deserialize, Deserializer, Serialize};

/// Status value the catalog uses for courses that should be listed.
pub const ACTIVE_STATUS: &str = "active";

/// A course entry from the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(alias = "course_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "course_name", default)]
    pub name: String,
    #[serde(alias = "course_description", default)]
    pub description: String,
    /// File name of the question set, relative to the resources endpoint.
    #[serde(alias = "course_file", default)]
    pub resource_file: String,
    #[serde(default)]
    pub status: String,
}

impl Course {
    /// Whether the catalog marks this course as listed.
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// A multiple-choice question as delivered by the question source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(alias = "question", default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(
        alias = "numOptions",
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_options: Option<u32>,
}

/// How the canonical answers of a question are compared against its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    /// Every answer token is a single letter A-F.
    Letter,
    /// At least one answer token is free text.
    Text,
}

/// Display data for one option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionMatch {
    pub letter: String,
    pub display_text: String,
    pub is_correct: bool,
}

/// A question with every option evaluated against its answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedQuestion {
    pub text: String,
    pub options: Vec<OptionMatch>,
    /// Canonical answer tokens, in order.
    pub answers: Vec<String>,
    pub answer_mode: AnswerMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_options: Option<u32>,
}

/// Accepts ids encoded either as JSON strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Reads a count sent as an integer, an integral float or a numeric string.
/// Anything else decodes as `None`.
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

fn count_from_value(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => match n.as_u64() {
            Some(count) => u32::try_from(count).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u32),
        },
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<u32>()
                .ok()
                .or_else(|| count_from_value(&serde_json::Value::from(trimmed.parse::<f64>().ok()?)))
        }
        _ => None,
    }
}
