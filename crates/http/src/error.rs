//! Error types for the HTTP base service

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Error payload shape returned by the backend.
///
/// The API is inconsistent about message casing (`message` vs `Message`),
/// so both spellings are accepted. `code` is the structured reason code
/// newer backend versions attach; older ones only send prose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub code: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

/// Error type for the HTTP base service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("API error: {message} (status {status})")]
    Api {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    /// The token refresh call itself failed. The stored token has already
    /// been cleared when this surfaces.
    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed.message.unwrap_or_else(|| body.to_string());
        ApiError::Api {
            status,
            code: parsed.code,
            message,
        }
    }

    /// Whether this error means the access token expired and a refresh
    /// should be attempted.
    ///
    /// 401 always qualifies. 403 qualifies when the backend says the token
    /// expired: the structured `token_expired` code, or, for backend
    /// versions that only send prose, a message containing "expired".
    pub fn is_auth_expired(&self) -> bool {
        match self {
            ApiError::Api {
                status,
                code,
                message,
            } => {
                if *status == StatusCode::UNAUTHORIZED {
                    return true;
                }
                if *status == StatusCode::FORBIDDEN {
                    if code.as_deref() == Some("token_expired") {
                        return true;
                    }
                    return message.to_lowercase().contains("expired");
                }
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_always_expired() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, "");
        assert!(err.is_auth_expired());
    }

    #[test]
    fn forbidden_with_expired_message_is_expired() {
        let err = ApiError::from_response(
            StatusCode::FORBIDDEN,
            r#"{"message":"Token Expired, please sign in again"}"#,
        );
        assert!(err.is_auth_expired());
    }

    #[test]
    fn forbidden_with_structured_code_is_expired() {
        let err =
            ApiError::from_response(StatusCode::FORBIDDEN, r#"{"code":"token_expired"}"#);
        assert!(err.is_auth_expired());
    }

    #[test]
    fn forbidden_without_expiry_signal_is_not_expired() {
        let err = ApiError::from_response(
            StatusCode::FORBIDDEN,
            r#"{"message":"You do not have access to this resource"}"#,
        );
        assert!(!err.is_auth_expired());
    }

    #[test]
    fn other_statuses_are_not_expired() {
        let err = ApiError::from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"token expired"}"#,
        );
        assert!(!err.is_auth_expired());
    }

    #[test]
    fn error_body_accepts_pascal_case_message() {
        let err = ApiError::from_response(
            StatusCode::FORBIDDEN,
            r#"{"Message":"token expired"}"#,
        );
        assert!(err.is_auth_expired());
    }

    #[test]
    fn unparsable_body_falls_back_to_raw_text() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, "not json");
        match err {
            ApiError::Api { message, code, .. } => {
                assert_eq!(message, "not json");
                assert!(code.is_none());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
