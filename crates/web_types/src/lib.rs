//! Request and response bodies exchanged with the authentication service.

use core_types::Role;
use serde::{Deserialize, Serialize};

/// Path of the login endpoint, relative to the API base URL.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Path of the registration endpoint, relative to the API base URL.
pub const REGISTER_PATH: &str = "/api/auth/register";

/// POST /api/auth/login request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub email: String,
    /// Raw role string; unknown values are rejected by the client, not here.
    #[serde(default)]
    pub role: String,
}

impl LoginResponse {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// POST /api/auth/register request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    /// Build a request, normalizing the email to trimmed lowercase.
    pub fn new(username: &str, email: &str, password: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            email: email.trim().to_lowercase(),
            password: password.to_string(),
            role,
        }
    }
}

/// One entry of a validation error list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub msg: Option<String>,
}

/// The `detail` field of an error response.
///
/// The service sends either a plain message or a list of validation
/// issues; anything else is kept but carries no displayable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
    Other(serde_json::Value),
}

/// Error response body returned with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

impl ApiErrorBody {
    /// Parse an error body, returning `None` if it is not JSON.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Single display message for this error, if the server supplied one.
    ///
    /// Lists yield the first issue's `msg`. Empty strings count as absent.
    pub fn message(&self) -> Option<String> {
        let message = match self.detail.as_ref()? {
            ErrorDetail::Message(message) => Some(message.clone()),
            ErrorDetail::Issues(issues) => issues.first().and_then(|i| i.msg.clone()),
            ErrorDetail::Other(_) => None,
        };

        message.filter(|m| !m.is_empty())
    }
}

/// Normalize a raw error body into the text shown to the user.
pub fn server_message(body: &str, fallback: &str) -> String {
    ApiErrorBody::parse(body)
        .and_then(|b| b.message())
        .unwrap_or_else(|| fallback.to_string())
}
