//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::types::{AnswerMode, Course, MatchedQuestion, OptionMatch, Question};

/// Query string for list endpoints (`?q=`)
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchQuery {
    /// The search text, empty when absent.
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

/// Response for GET /api/courses
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
    /// Number of listed courses before filtering.
    pub total: usize,
    /// Number of courses matching the query.
    pub matched: usize,
}

/// One rendered question card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCard {
    /// 1-based position within the returned list.
    pub number: usize,
    #[serde(flatten)]
    pub question: MatchedQuestion,
}

/// Response for GET /api/courses/{course_id}/questions
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub course: Course,
    pub questions: Vec<QuestionCard>,
    pub total: usize,
    pub matched: usize,
}
