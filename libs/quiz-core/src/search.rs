//! Case-insensitive substring search over courses and questions.

use crate::types::{Course, Question};

/// Whether any of the haystacks contains the query, ignoring case.
///
/// A query that is blank after trimming matches everything. Otherwise the
/// lowercased query is used as typed, surrounding spaces included.
pub fn matches_query<I, S>(haystacks: I, query: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    haystacks
        .into_iter()
        .any(|h| h.as_ref().to_lowercase().contains(&needle))
}

/// Courses whose name or description contains the query.
pub fn filter_courses<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| matches_query([c.name.as_str(), c.description.as_str()], query))
        .collect()
}

/// Questions whose text or any option contains the query.
pub fn filter_questions<'a>(questions: &'a [Question], query: &str) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| {
            matches_query(
                std::iter::once(q.text.as_str()).chain(q.options.iter().map(String::as_str)),
                query,
            )
        })
        .collect()
}
