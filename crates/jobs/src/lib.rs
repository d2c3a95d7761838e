//! Job-posting service client for the JobBoard API
//!
//! Thin typed wrappers over the employer-post and saved-job endpoints.
//! Authentication, token refresh, and replay are handled by the shared
//! HTTP layer underneath.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use jobboard_rust_http::{ApiClient, ApiError};

/// A published job posting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPost {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Monthly salary; absent or non-positive means "negotiable".
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub employer_id: Option<i64>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A saved-job entry as the backend returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJob {
    pub employer_post_id: i64,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub added_at: Option<String>,
}

/// A page of saved jobs.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedJobsPage {
    pub data: Vec<SavedJob>,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct JobPostEnvelope {
    data: JobPost,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveJobRequest {
    job_seeker_id: i64,
    employer_post_id: i64,
    note: Option<String>,
}

/// Client for job postings and the saved-jobs list.
pub struct JobsClient {
    api: Arc<ApiClient>,
}

impl JobsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetch a single job posting. The endpoint wraps the post in a
    /// `{ data }` envelope.
    pub async fn job_detail(&self, id: i64) -> Result<JobPost, ApiError> {
        let envelope: JobPostEnvelope = self
            .api
            .get(&format!("/EmployerPost/{}", id))
            .execute()
            .await?;
        Ok(envelope.data)
    }

    /// List the jobs a job seeker has saved.
    pub async fn saved_jobs(&self, job_seeker_id: i64) -> Result<SavedJobsPage, ApiError> {
        self.api
            .get(&format!("/JobSeekerPost/saved/{}", job_seeker_id))
            .execute()
            .await
    }

    /// Save a job posting for later.
    pub async fn save_job(&self, job_seeker_id: i64, post_id: i64) -> Result<(), ApiError> {
        let payload = SaveJobRequest {
            job_seeker_id,
            employer_post_id: post_id,
            note: None,
        };
        self.api
            .post("/JobSeekerPost/save-job")
            .json(&payload)?
            .execute_empty()
            .await
    }

    /// Remove a job posting from the saved list.
    pub async fn unsave_job(&self, job_seeker_id: i64, post_id: i64) -> Result<(), ApiError> {
        let payload = SaveJobRequest {
            job_seeker_id,
            employer_post_id: post_id,
            note: None,
        };
        self.api
            .post("/JobSeekerPost/unsave-job")
            .json(&payload)?
            .execute_empty()
            .await
    }
}
