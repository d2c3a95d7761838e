//! Request building and the refresh-and-replay response path

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::ApiError;
use crate::refresh::{RefreshCoordinator, RefreshTicket};
use crate::token::TokenStore;

const REFRESH_PATH: &str = "/Auth/refresh";

/// Shared HTTP layer for every JobBoard service client.
///
/// Attaches the bearer credential to outgoing requests, classifies
/// authentication failures, and coordinates the single-flight refresh
/// that replays expired requests. The reqwest cookie jar carries the
/// HTTP-only refresh credential the backend sets at login.
pub struct ApiClient {
    base_url: String,
    http: Client,
    tokens: TokenStore,
    refresh: RefreshCoordinator,
}

impl ApiClient {
    /// Create a client for the given API base URL (e.g.
    /// `https://localhost:7100/api`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Some(Duration::from_secs(30)))
    }

    /// Create a client with a custom request timeout (`None` disables it).
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        // Validate eagerly so a bad base URL fails at construction, not on
        // the first request.
        Url::parse(base_url)?;

        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            tokens: TokenStore::new(),
            refresh: RefreshCoordinator::new(),
        })
    }

    /// The credential store backing this client.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Create a GET request
    pub fn get(&self, path: &str) -> RequestBuilder<'_> {
        self.request(Method::GET, path)
    }

    /// Create a POST request
    pub fn post(&self, path: &str) -> RequestBuilder<'_> {
        self.request(Method::POST, path)
    }

    /// Create a PUT request
    pub fn put(&self, path: &str) -> RequestBuilder<'_> {
        self.request(Method::PUT, path)
    }

    /// Create a DELETE request
    pub fn delete(&self, path: &str) -> RequestBuilder<'_> {
        self.request(Method::DELETE, path)
    }

    /// Create a request with an arbitrary method
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder<'_> {
        RequestBuilder {
            client: self,
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Wait for a fresh access token, starting the refresh if nobody has.
    ///
    /// Concurrent callers that observe an expired token while a refresh is
    /// outstanding queue behind it and share its outcome; a second refresh
    /// is never started.
    pub async fn fresh_token(&self) -> Result<String, ApiError> {
        match self.refresh.join() {
            RefreshTicket::Follower(rx) => match rx.await {
                Ok(Ok(token)) => Ok(token),
                Ok(Err(message)) => Err(ApiError::RefreshFailed(message)),
                Err(_) => Err(ApiError::RefreshFailed("refresh abandoned".to_string())),
            },
            RefreshTicket::Leader => {
                debug!("access token expired, refreshing");
                let outcome = self.call_refresh().await;
                match &outcome {
                    Ok(token) => self.tokens.set(token),
                    Err(message) => {
                        warn!("token refresh failed: {}", message);
                        self.tokens.clear();
                    }
                }
                self.refresh.settle(outcome.clone());
                outcome.map_err(ApiError::RefreshFailed)
            }
        }
    }

    async fn call_refresh(&self) -> Result<String, String> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RefreshResponse {
            access_token: String,
        }

        let url = self.endpoint(REFRESH_PATH);
        let mut request = self.http.post(&url);
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(err.to_string()),
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(format!("status {}: {}", status, text));
        }

        match serde_json::from_str::<RefreshResponse>(&text) {
            Ok(body) => Ok(body.access_token),
            Err(err) => Err(format!("invalid refresh response: {}", err)),
        }
    }
}

/// Builder for a single API request.
///
/// The body is held as a JSON value so the request can be rebuilt verbatim
/// when it is replayed after a token refresh.
pub struct RequestBuilder<'a> {
    client: &'a ApiClient,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl<'a> RequestBuilder<'a> {
    /// Add a query parameter to the request
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Execute the request and deserialize the JSON response
    pub async fn execute<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let text = self.send().await?;
        let value = serde_json::from_str(&text)?;
        Ok(value)
    }

    /// Execute the request, discarding any response payload
    pub async fn execute_empty(self) -> Result<(), ApiError> {
        self.send().await.map(|_| ())
    }

    async fn send(self) -> Result<String, ApiError> {
        match self.attempt().await {
            Ok(text) => Ok(text),
            Err(err) if err.is_auth_expired() => {
                // One retry per request: a replay that fails authentication
                // again propagates below instead of re-entering this arm.
                self.client.fresh_token().await?;
                self.attempt().await
            }
            Err(err) => Err(err),
        }
    }

    async fn attempt(&self) -> Result<String, ApiError> {
        let url = self.client.endpoint(&self.path);
        let mut request = self.client.http.request(self.method.clone(), &url);

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        if let Some(token) = self.client.tokens.get() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &self.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &text));
        }

        Ok(text)
    }
}
