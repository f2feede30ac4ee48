//! Core quiz library used by the viewer backend.
//!
//! Provides:
//! - Answer normalization and option matching (letter lists or option text)
//! - Decoding of the remote course catalog and question sets
//! - Case-insensitive search over courses and questions
//! - Shared types (Course, Question, OptionMatch, etc.)

pub mod error;
pub mod matching;
pub mod payload;
pub mod search;
pub mod types;

pub use error::{ParseError, Result};
pub use matching::{
    clean_text, derive_letter, match_option, match_options, match_question, normalize,
    positional_letter, CanonicalAnswers, OPTION_LETTERS,
};
pub use payload::{active_courses, decode_courses, decode_questions};
pub use search::{filter_courses, filter_questions, matches_query};
pub use types::{AnswerMode, Course, MatchedQuestion, OptionMatch, Question};
