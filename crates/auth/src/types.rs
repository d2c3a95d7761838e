//! Request and response types for the auth endpoints

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Authenticated user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub roles: Vec<String>,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Case-insensitive role membership check.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

/// Raw payload from `GET /Auth/me`.
///
/// The identity endpoint stringifies both the id and the verified flag;
/// converting to [`UserProfile`] normalizes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: String,
    pub username: String,
    pub verified: String,
    pub roles: Vec<String>,
}

impl TryFrom<MeResponse> for UserProfile {
    type Error = AuthError;

    fn try_from(raw: MeResponse) -> Result<Self, Self::Error> {
        let id = raw.id.parse::<i64>().map_err(|_| {
            AuthError::InvalidProfile(format!("non-numeric user id: {:?}", raw.id))
        })?;

        Ok(UserProfile {
            id,
            username: raw.username,
            email: String::new(),
            roles: raw.roles,
            verified: raw.verified.eq_ignore_ascii_case("true"),
            full_name: None,
            avatar_url: None,
        })
    }
}

/// Body for `POST /Auth/login`. The backend accepts a username or an
/// email in the same field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
    pub device_info: String,
}

/// Response from `POST /Auth/login` and the Google completion endpoint.
///
/// `access_token` is absent when the account is pending approval; callers
/// must check before treating the response as a signed-in session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: UserProfile,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub requires_approval: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `POST /Auth/register/jobseeker`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterJobSeekerRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Body for `POST /Auth/register/employer`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployerRequest {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub email: String,
    pub password: String,
}

/// Body for `POST /change-password/confirm`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmChangePasswordRequest {
    pub token: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// Prompt returned by the Google prepare endpoint when the account has no
/// role yet and the caller must pick one before completion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleRoleSelection {
    pub need_role_selection: bool,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    pub available_roles: Vec<String>,
}

/// Response from `POST /Auth/google/prepare`: either a signed-in session
/// or a role-selection prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GooglePrepareResponse {
    NeedRoleSelection(GoogleRoleSelection),
    SignedIn(LoginResponse),
}
