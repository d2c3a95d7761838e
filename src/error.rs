//! Error handling for the JobBoard Rust client

use thiserror::Error;

/// Unified error type for the JobBoard Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport or backend errors
    #[error("HTTP error: {0}")]
    Http(#[from] jobboard_rust_http::ApiError),

    /// Session and authentication errors
    #[error("Authentication error: {0}")]
    Auth(#[from] jobboard_rust_auth::AuthError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}
