//! Test fixtures and factory functions for creating upstream payloads.

use serde_json::{json, Value};

use super::MockCatalog;

/// A course entry as the catalog API encodes it.
pub fn course(id: &str, name: &str, description: &str, file: &str, status: &str) -> Value {
    json!({
        "course_id": id,
        "course_name": name,
        "course_description": description,
        "course_file": file,
        "status": status
    })
}

/// A successful catalog response.
pub fn catalog(courses: Vec<Value>) -> Value {
    json!({ "success": true, "data": courses })
}

/// Two active courses and one inactive draft.
pub fn sample_catalog() -> Value {
    catalog(vec![
        course("1", "Networking", "TCP/IP fundamentals", "net.json", "active"),
        course("2", "Databases", "Relational modelling", "db.json", "active"),
        course("3", "Draft", "Not published yet", "draft.json", "inactive"),
    ])
}

/// A question as the question source encodes it.
pub fn question(text: &str, options: &[&str], answers: &[&str]) -> Value {
    json!({
        "question": text,
        "options": options,
        "answers": answers,
        "numOptions": options.len()
    })
}

/// A question set response.
pub fn question_set(questions: Vec<Value>) -> Value {
    json!({ "questions": questions })
}

/// Questions covering single letters, letter lists, text answers and no options.
pub fn networking_questions() -> Value {
    question_set(vec![
        question(
            "Which layer does TCP belong to?",
            &["A. Application", "B. Transport", "C. Network", "D. Link"],
            &["B"],
        ),
        question(
            "Which ranges are private IPv4 space?",
            &["A. 10.0.0.0/8", "B. 8.8.8.0/24", "C. 192.168.0.0/16", "D. 172.16.0.0/12"],
            &["a c, d"],
        ),
        question(
            "What does DNS stand for?",
            &["Dynamic Name Service", "Domain Name System", "Data Network Standard"],
            &["Domain Name System"],
        ),
        question("Which transport protocol is connectionless?", &[], &["UDP"]),
    ])
}

/// Mock catalog serving the sample catalog and the networking questions.
pub fn sample_mock() -> MockCatalog {
    MockCatalog::new()
        .catalog(sample_catalog())
        .file("net.json", networking_questions())
        .file("draft.json", question_set(vec![]))
}
