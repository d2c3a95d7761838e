//! Configuration for the JobBoard client

use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Connection settings for a JobBoard deployment.
///
/// It's recommended to load these values from environment variables or a
/// secure config source.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
}

impl Config {
    /// Creates a new configuration, validating the base URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { base_url })
    }

    /// Attempts to create configuration from the `JOBBOARD_API_URL`
    /// environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var("JOBBOARD_API_URL").map_err(|_| {
            Error::Config("JOBBOARD_API_URL environment variable not found".to_string())
        })?;
        Self::new(&base_url)
    }
}

/// Tunables for the client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout; `None` disables it.
    pub request_timeout: Option<Duration>,

    /// Device label sent with login requests.
    pub device_info: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            device_info: "WebApp".to_string(),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the device label sent with login requests
    pub fn with_device_info(mut self, value: &str) -> Self {
        self.device_info = value.to_string();
        self
    }
}
