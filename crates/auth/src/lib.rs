//! Session management and authentication for the JobBoard API
//!
//! This crate implements the client-side session lifecycle: bootstrap at
//! application start, credential login, client-side logout, and the
//! identity fetch that keeps the cached profile in sync with the backend.
//! Registration, email verification, and the password and Google sign-in
//! flows ride on the same manager.

mod session;
mod types;

pub use session::{SessionSnapshot, SessionStatus};
pub use types::*;

use std::sync::{Arc, RwLock};

use log::{debug, warn};
use serde_json::json;
use thiserror::Error;

use jobboard_rust_http::{ApiClient, ApiError};

/// Error type for session and authentication operations
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid profile payload: {0}")]
    InvalidProfile(String),
}

/// Client-side session state machine.
///
/// Owns its state outright: two managers over two [`ApiClient`]s are two
/// fully independent sessions. Lifecycle is `bootstrap()` at startup and
/// `clear()` (or `logout()`) at teardown.
pub struct SessionManager {
    api: Arc<ApiClient>,
    state: RwLock<SessionSnapshot>,
    device_info: String,
}

impl SessionManager {
    /// Create a manager over the shared HTTP layer.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: RwLock::new(SessionSnapshot::default()),
            device_info: "WebApp".to_string(),
        }
    }

    /// Override the device label sent with login requests.
    pub fn with_device_info(mut self, device_info: &str) -> Self {
        self.device_info = device_info.to_string();
        self
    }

    /// Current session snapshot.
    pub fn current(&self) -> SessionSnapshot {
        self.state.read().unwrap().clone()
    }

    /// Current initialization status.
    pub fn status(&self) -> SessionStatus {
        self.state.read().unwrap().status
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state.read().unwrap().is_authenticated
    }

    /// Whether the signed-in user holds any of the allowed roles.
    ///
    /// Role names compare case-insensitively, matching the backend's
    /// loose casing. Anonymous sessions hold no roles.
    pub fn has_any_role(&self, allowed: &[&str]) -> bool {
        let state = self.state.read().unwrap();
        match &state.user {
            Some(user) => allowed.iter().any(|role| user.has_role(role)),
            None => false,
        }
    }

    /// Initialize the session at application start.
    ///
    /// With a stored token the identity endpoint decides the outcome: on
    /// success the session is authenticated, on any failure the token is
    /// cleared and the session settles as failed. With no stored token the
    /// session settles immediately as anonymous, with zero network calls.
    pub async fn bootstrap(&self) -> SessionSnapshot {
        if self.api.tokens().get().is_none() {
            debug!("no stored token, session settles as anonymous");
            let mut state = self.state.write().unwrap();
            state.status = SessionStatus::Succeeded;
            return state.clone();
        }

        {
            let mut state = self.state.write().unwrap();
            state.status = SessionStatus::Loading;
        }

        match self.me().await {
            Ok(user) => {
                debug!("bootstrap identity fetch succeeded for user {}", user.id);
                let mut state = self.state.write().unwrap();
                state.user = Some(user);
                state.is_authenticated = true;
                state.status = SessionStatus::Succeeded;
                state.clone()
            }
            Err(err) => {
                warn!("bootstrap identity fetch failed: {}", err);
                self.api.tokens().clear();
                let mut state = self.state.write().unwrap();
                state.user = None;
                state.is_authenticated = false;
                state.status = SessionStatus::Failed;
                state.clone()
            }
        }
    }

    /// Fetch the current user from the identity endpoint.
    pub async fn me(&self) -> Result<UserProfile, AuthError> {
        let raw: MeResponse = self.api.get("/Auth/me").execute().await?;
        UserProfile::try_from(raw)
    }

    /// Log in with email (or username) and password.
    ///
    /// On success the token is stored and the session becomes
    /// authenticated. A response without an access token (account pending
    /// approval) leaves the session untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let payload = LoginRequest {
            username_or_email: email.to_string(),
            password: password.to_string(),
            device_info: self.device_info.clone(),
        };

        let response: LoginResponse = self
            .api
            .post("/Auth/login")
            .json(&payload)?
            .execute()
            .await?;

        self.adopt_login(&response);
        Ok(response)
    }

    /// Tear down the session: forget the token and the cached user.
    ///
    /// Purely client-side; nothing is sent to the server.
    pub fn clear(&self) {
        self.api.tokens().clear();
        let mut state = self.state.write().unwrap();
        state.user = None;
        state.is_authenticated = false;
        state.status = SessionStatus::Succeeded;
    }

    /// Log out the current user. Alias for [`clear`](Self::clear).
    pub fn logout(&self) {
        self.clear();
    }

    /// Register a job-seeker account.
    pub async fn register_job_seeker(
        &self,
        payload: &RegisterJobSeekerRequest,
    ) -> Result<(), AuthError> {
        self.api
            .post("/Auth/register/jobseeker")
            .json(payload)?
            .execute_empty()
            .await?;
        Ok(())
    }

    /// Register an employer account. Employer accounts may require admin
    /// approval before login succeeds.
    pub async fn register_employer(
        &self,
        payload: &RegisterEmployerRequest,
    ) -> Result<(), AuthError> {
        self.api
            .post("/Auth/register/employer")
            .json(payload)?
            .execute_empty()
            .await?;
        Ok(())
    }

    /// Confirm an email address with the token from the verification mail.
    pub async fn verify_email(&self, token: &str) -> Result<(), AuthError> {
        self.api
            .post("/Auth/verify-email")
            .json(&json!({ "token": token }))?
            .execute_empty()
            .await?;
        Ok(())
    }

    /// Request a password-reset mail.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.api
            .post("/Auth/forgot-password")
            .json(&json!({ "email": email }))?
            .execute_empty()
            .await?;
        Ok(())
    }

    /// Set a new password using the token from the reset mail.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        self.api
            .post("/Auth/reset-password")
            .json(&json!({ "token": token, "newPassword": new_password }))?
            .execute_empty()
            .await?;
        Ok(())
    }

    /// Change the password of the signed-in user.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        self.api
            .post("/User/change-password")
            .json(&json!({
                "currentPassword": current_password,
                "newPassword": new_password
            }))?
            .execute_empty()
            .await?;
        Ok(())
    }

    /// Start the mail-confirmed password change flow.
    pub async fn request_change_password(&self, current_password: &str) -> Result<(), AuthError> {
        self.api
            .post("/change-password/request")
            .json(&json!({ "currentPassword": current_password }))?
            .execute_empty()
            .await?;
        Ok(())
    }

    /// Finish the mail-confirmed password change flow.
    pub async fn confirm_change_password(
        &self,
        payload: &ConfirmChangePasswordRequest,
    ) -> Result<(), AuthError> {
        self.api
            .post("/change-password/confirm")
            .json(payload)?
            .execute_empty()
            .await?;
        Ok(())
    }

    /// Exchange a Google ID token. The backend either signs the user in
    /// directly or asks for a role selection first.
    pub async fn google_prepare(&self, id_token: &str) -> Result<GooglePrepareResponse, AuthError> {
        let response: GooglePrepareResponse = self
            .api
            .post("/Auth/google/prepare")
            .json(&json!({ "idToken": id_token }))?
            .execute()
            .await?;

        if let GooglePrepareResponse::SignedIn(login) = &response {
            self.adopt_login(login);
        }

        Ok(response)
    }

    /// Complete a Google sign-in after role selection.
    pub async fn google_complete(
        &self,
        id_token: &str,
        role: &str,
    ) -> Result<LoginResponse, AuthError> {
        let response: LoginResponse = self
            .api
            .post("/Auth/google/complete")
            .json(&json!({ "idToken": id_token, "role": role }))?
            .execute()
            .await?;

        self.adopt_login(&response);
        Ok(response)
    }

    fn adopt_login(&self, response: &LoginResponse) {
        if let Some(token) = &response.access_token {
            self.api.tokens().set(token);
            let mut state = self.state.write().unwrap();
            state.user = Some(response.user.clone());
            state.is_authenticated = true;
            state.status = SessionStatus::Succeeded;
        }
    }
}
