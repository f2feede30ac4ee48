//! Course and question endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use quiz_core::{filter_courses, filter_questions, match_question};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/courses
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<CourseListResponse>> {
    let active = state.catalog.fetch_active_courses().await?;
    let courses: Vec<Course> = filter_courses(&active, query.text())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(CourseListResponse {
        total: active.len(),
        matched: courses.len(),
        courses,
    }))
}

/// GET /api/courses/{course_id}
pub async fn get(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>> {
    let course = find_course(&state, &course_id).await?;
    Ok(Json(course))
}

/// GET /api/courses/{course_id}/questions
pub async fn questions(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<QuestionListResponse>> {
    let course = find_course(&state, &course_id).await?;
    let questions = state.catalog.fetch_questions(&course.resource_file).await?;

    let cards: Vec<QuestionCard> = filter_questions(&questions, query.text())
        .into_iter()
        .enumerate()
        .map(|(idx, q)| QuestionCard {
            number: idx + 1,
            question: match_question(q),
        })
        .collect();

    tracing::info!(
        "Serving {} of {} questions for course {}",
        cards.len(),
        questions.len(),
        course.id
    );

    Ok(Json(QuestionListResponse {
        course,
        total: questions.len(),
        matched: cards.len(),
        questions: cards,
    }))
}

async fn find_course(state: &AppState, course_id: &str) -> Result<Course> {
    state
        .catalog
        .find_course(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Course {}", course_id)))
}
