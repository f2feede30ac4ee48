//! HTTP client for the remote course catalog and question sets.

use std::time::Duration;

use quiz_core::{active_courses, decode_courses, decode_questions, Course, ParseError, Question};
use reqwest::Client;
use thiserror::Error;

/// Catalog client errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Client for the course catalog API.
///
/// Cheap to share behind an `Arc`; the inner reqwest client pools connections.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every course in the catalog, whatever its status.
    pub async fn fetch_courses(&self) -> Result<Vec<Course>, CatalogError> {
        let url = format!("{}/?act=get_courses", self.base_url);
        let body = self.post(&url).await?;
        let courses = decode_courses(&body)?;
        tracing::debug!("Fetched {} courses", courses.len());
        Ok(courses)
    }

    /// Fetch the courses that should be listed.
    ///
    /// An unsuccessful catalog response lists nothing instead of failing.
    pub async fn fetch_active_courses(&self) -> Result<Vec<Course>, CatalogError> {
        match self.fetch_courses().await {
            Ok(courses) => Ok(active_courses(courses)),
            Err(CatalogError::Parse(ParseError::Unsuccessful)) => {
                tracing::warn!("Catalog reported failure; listing no courses");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Look up a course by id, whatever its status.
    pub async fn find_course(&self, course_id: &str) -> Result<Option<Course>, CatalogError> {
        let courses = self.fetch_courses().await?;
        Ok(courses.into_iter().find(|c| c.id == course_id))
    }

    /// Fetch the question set stored in a course resource file.
    pub async fn fetch_questions(&self, resource_file: &str) -> Result<Vec<Question>, CatalogError> {
        let url = format!("{}/3do_resources/{}", self.base_url, resource_file);
        let body = self.post(&url).await?;
        let questions = decode_questions(&body)?;
        tracing::debug!("Fetched {} questions from {}", questions.len(), resource_file);
        Ok(questions)
    }

    async fn post(&self, url: &str) -> Result<String, CatalogError> {
        let resp = self.client.post(url).send().await.map_err(|e| {
            tracing::error!("Catalog request to {} failed: {}", url, e);
            CatalogError::Network(e.to_string())
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!("Catalog request to {} returned {}", url, status);
            return Err(CatalogError::Upstream { status, message });
        }

        resp.text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))
    }
}
