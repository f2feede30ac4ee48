//! Decoding of the remote catalog payloads.
//!
//! # Format
//! ```json
//! {"success": true, "data": [{"course_id": "1", "course_name": "...",
//!   "course_description": "...", "course_file": "net.json", "status": "active"}]}
//!
//! {"questions": [{"question": "...", "options": ["A. ..."], "answers": ["A"],
//!   "numOptions": 4}]}
//! ```

use serde::Deserialize;

use crate::error::{ParseError, Result};
use crate::types::{Course, Question};

#[derive(Debug, Deserialize)]
struct CoursesResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Vec<Course>>,
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    #[serde(default)]
    questions: Option<Vec<Question>>,
}

/// Decode the course catalog, keeping courses of every status.
///
/// Fails with [`ParseError::Unsuccessful`] when the catalog reports
/// `success: false`.
pub fn decode_courses(body: &str) -> Result<Vec<Course>> {
    let response: CoursesResponse = serde_json::from_str(body)?;
    if !response.success {
        return Err(ParseError::Unsuccessful);
    }
    Ok(response.data.unwrap_or_default())
}

/// Decode a question set. A missing or null `questions` field is empty.
pub fn decode_questions(body: &str) -> Result<Vec<Question>> {
    let response: QuestionsResponse = serde_json::from_str(body)?;
    Ok(response.questions.unwrap_or_default())
}

/// Keep only the courses the catalog marks as active, in catalog order.
pub fn active_courses(courses: Vec<Course>) -> Vec<Course> {
    courses.into_iter().filter(Course::is_active).collect()
}
