//! JobBoard Rust Client Library
//!
//! A Rust client for the JobBoard REST API: session bootstrap, bearer
//! authentication with single-flight token refresh, and typed service
//! clients for job postings and ratings.
//!
//! ```no_run
//! use jobboard_rust::{Config, JobBoard};
//!
//! # async fn run() -> Result<(), jobboard_rust::Error> {
//! let client = JobBoard::new(Config::new("https://localhost:7100/api")?)?;
//!
//! // Settle the session before making any routing decision.
//! let session = client.auth().bootstrap().await;
//! if !session.is_authenticated {
//!     client.auth().login("alice@example.com", "password123").await?;
//! }
//!
//! let job = client.jobs().job_detail(42).await?;
//! println!("{}", job.title);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

pub use config::{ClientOptions, Config};
pub use error::Error;

pub use jobboard_rust_auth as auth;
pub use jobboard_rust_http as http;
pub use jobboard_rust_jobs as jobs;
pub use jobboard_rust_ratings as ratings;

use std::sync::Arc;

use jobboard_rust_auth::SessionManager;
use jobboard_rust_http::ApiClient;
use jobboard_rust_jobs::JobsClient;
use jobboard_rust_ratings::RatingsClient;

/// The main entry point for the JobBoard Rust client
pub struct JobBoard {
    api: Arc<ApiClient>,
    auth: SessionManager,
    jobs: JobsClient,
    ratings: RatingsClient,
}

impl JobBoard {
    /// Create a new client with default options
    pub fn new(config: Config) -> Result<Self, Error> {
        Self::new_with_options(config, ClientOptions::default())
    }

    /// Create a new client with custom options
    pub fn new_with_options(config: Config, options: ClientOptions) -> Result<Self, Error> {
        let api = Arc::new(ApiClient::with_timeout(
            config.base_url.as_str(),
            options.request_timeout,
        )?);

        let auth = SessionManager::new(api.clone()).with_device_info(&options.device_info);
        let jobs = JobsClient::new(api.clone());
        let ratings = RatingsClient::new(api.clone());

        Ok(Self {
            api,
            auth,
            jobs,
            ratings,
        })
    }

    /// Convenience constructor reading the base URL from the environment
    pub fn from_env() -> Result<Self, Error> {
        Self::new(Config::from_env()?)
    }

    /// Session manager: bootstrap, login, logout, identity
    pub fn auth(&self) -> &SessionManager {
        &self.auth
    }

    /// Job postings and the saved-jobs list
    pub fn jobs(&self) -> &JobsClient {
        &self.jobs
    }

    /// Ratings endpoints
    pub fn ratings(&self) -> &RatingsClient {
        &self.ratings
    }

    /// The shared HTTP layer, for direct token-store access
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
