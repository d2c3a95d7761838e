//! Ratings service client for the JobBoard API

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use jobboard_rust_http::{ApiClient, ApiError};

/// A rating left for a user after a completed submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub rating_id: i64,
    pub rater_id: i64,
    #[serde(default)]
    pub rater_name: Option<String>,
    pub rating_value: i32,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}

/// Body for `POST /Rating`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    pub ratee_id: i64,
    pub submission_id: i64,
    pub rating_value: i32,
    pub comment: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatingAverageResponse {
    #[allow(dead_code)]
    user_id: i64,
    average: Option<f64>,
}

/// Client for the ratings endpoints.
pub struct RatingsClient {
    api: Arc<ApiClient>,
}

impl RatingsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// All ratings left for a user. An unset user id short-circuits to an
    /// empty list without a network call.
    pub async fn ratings_for_user(&self, user_id: i64) -> Result<Vec<Rating>, ApiError> {
        if user_id == 0 {
            return Ok(Vec::new());
        }
        self.api
            .get(&format!("/Rating/user/{}", user_id))
            .execute()
            .await
    }

    /// Average rating for a user; a user with no ratings averages 0.
    pub async fn average_for_user(&self, user_id: i64) -> Result<f64, ApiError> {
        if user_id == 0 {
            return Ok(0.0);
        }
        let response: RatingAverageResponse = self
            .api
            .get(&format!("/Rating/user/{}/average", user_id))
            .execute()
            .await?;
        Ok(response.average.unwrap_or(0.0))
    }

    /// Submit a rating.
    pub async fn create(&self, payload: &CreateRatingRequest) -> Result<(), ApiError> {
        self.api
            .post("/Rating")
            .json(payload)?
            .execute_empty()
            .await
    }
}
