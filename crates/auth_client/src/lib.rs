//! Authentication flows for the PresenX client.
//!
//! This crate provides:
//! - AuthConfig: where the authentication service lives
//! - LoginForm / RegistrationForm: field validation and request building
//! - AuthClient: the submit → request → interpret → persist flow
//!
//! Network access and persistence are behind the [`Transport`] and
//! [`SessionStore`] traits so the flows run the same in the browser
//! and in tests.

mod session;
mod transport;

use core_types::{Destination, Role};
use thiserror::Error;
use web_types::{LoginRequest, LoginResponse, RegisterRequest, server_message};

pub use session::{
    ACCESS_TOKEN_KEY, MemorySessionStore, SessionError, SessionStore, StoredSession,
    USER_EMAIL_KEY,
};
pub use transport::{HttpResponse, Transport, TransportError};

/// Default base URL of the authentication service.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

const LOGIN_MISSING_FIELDS: &str = "Please enter both email and password.";
const LOGIN_FAILED: &str = "Login failed. Check your credentials.";
const LOGIN_UNREACHABLE: &str = "Server not reachable. Please check your network or try again later.";
const REGISTER_MISSING_FIELDS: &str = "All fields are required.";
const REGISTER_FAILED: &str = "Registration failed";
const REGISTER_UNREACHABLE: &str = "Backend server not reachable.";

/// Errors from the auth flows. Every variant ends the current attempt.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{message}")]
    Transport {
        message: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("{0}")]
    Server(String),

    #[error("Login successful, but role is unrecognized. Contact support.")]
    UnrecognizedRole(String),

    #[error("Could not save your session: {0}")]
    Session(#[from] SessionError),
}

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Configuration for the auth client.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Base URL (default: http://127.0.0.1:8000, or PRESENX_API_BASE at build time)
    pub base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(option_env!("PRESENX_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl AuthConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, web_types::LOGIN_PATH)
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, web_types::REGISTER_PATH)
    }
}

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Check required fields and build the request body.
    pub fn validate(&self) -> Result<LoginRequest> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::Validation(LOGIN_MISSING_FIELDS));
        }

        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Registration form fields. `role` is `None` until one is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub role: Option<Role>,
    pub password: String,
}

impl RegistrationForm {
    /// Check required fields and build the request body.
    pub fn validate(&self) -> Result<RegisterRequest> {
        let Some(role) = self.role else {
            return Err(AuthError::Validation(REGISTER_MISSING_FIELDS));
        };

        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::Validation(REGISTER_MISSING_FIELDS));
        }

        Ok(RegisterRequest::new(
            &self.username,
            &self.email,
            &self.password,
            role,
        ))
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSuccess {
    pub session: StoredSession,
    pub role: Role,
    pub destination: Destination,
}

/// Client for the authentication service.
pub struct AuthClient<T, S> {
    config: AuthConfig,
    transport: T,
    session: S,
}

impl<T: Transport, S: SessionStore> AuthClient<T, S> {
    /// Create a new AuthClient with the given config and collaborators.
    pub fn new(config: AuthConfig, transport: T, session: S) -> Self {
        Self {
            config,
            transport,
            session,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Validate, authenticate, persist the session and pick a dashboard.
    ///
    /// The session is saved before the role is checked, so an unknown
    /// role still leaves the token in storage.
    pub async fn login(&self, form: &LoginForm) -> Result<LoginSuccess> {
        let request = form.validate()?;
        let url = self.config.login_url();

        log::debug!("POST {url}");
        let response = self
            .transport
            .post_json(&url, &request)
            .await
            .map_err(|source| {
                log::warn!("login request failed: {source}");
                AuthError::Transport {
                    message: LOGIN_UNREACHABLE,
                    source,
                }
            })?;

        if !response.is_success() {
            log::debug!("login rejected with status {}", response.status);
            return Err(AuthError::Server(server_message(
                &response.body,
                LOGIN_FAILED,
            )));
        }

        let data: LoginResponse = serde_json::from_str(&response.body).map_err(|e| {
            log::warn!("login response could not be decoded: {e}");
            AuthError::Transport {
                message: LOGIN_UNREACHABLE,
                source: TransportError::Decode(e.to_string()),
            }
        })?;

        let session = StoredSession {
            access_token: data.access_token.clone(),
            email: data.email.clone(),
        };
        self.session.save(&session)?;

        let role = data
            .role()
            .ok_or_else(|| AuthError::UnrecognizedRole(data.role.clone()))?;

        Ok(LoginSuccess {
            session,
            role,
            destination: role.dashboard(),
        })
    }

    /// Validate and create an account. On success the user goes to login.
    pub async fn register(&self, form: &RegistrationForm) -> Result<Destination> {
        let request = form.validate()?;
        let url = self.config.register_url();

        log::debug!("POST {url}");
        let response = self
            .transport
            .post_json(&url, &request)
            .await
            .map_err(|source| {
                log::warn!("registration request failed: {source}");
                AuthError::Transport {
                    message: REGISTER_UNREACHABLE,
                    source,
                }
            })?;

        if !response.is_success() {
            log::debug!("registration rejected with status {}", response.status);
            return Err(AuthError::Server(server_message(
                &response.body,
                REGISTER_FAILED,
            )));
        }

        Ok(Destination::Login)
    }

    /// Drop the persisted session and return to the landing page.
    pub fn logout(&self) -> Destination {
        logout(&self.session)
    }
}

/// Clear the persisted session and return the landing destination.
pub fn logout<S: SessionStore>(session: &S) -> Destination {
    session.clear();
    Destination::Landing
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::cell::RefCell;

    /// Transport that replays a canned result and records every call.
    struct MockTransport {
        reply: std::result::Result<HttpResponse, TransportError>,
        calls: RefCell<Vec<(String, serde_json::Value)>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpResponse::new(status, body)),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(TransportError::Network("connection refused".to_string())),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Transport for MockTransport {
        async fn post_json<B: Serialize>(
            &self,
            url: &str,
            body: &B,
        ) -> std::result::Result<HttpResponse, TransportError> {
            let body = serde_json::to_value(body).unwrap();
            self.calls.borrow_mut().push((url.to_string(), body));
            self.reply.clone()
        }
    }

    fn client(transport: MockTransport) -> AuthClient<MockTransport, MemorySessionStore> {
        AuthClient::new(
            AuthConfig::new("http://auth.test"),
            transport,
            MemorySessionStore::new(),
        )
    }

    fn registration() -> RegistrationForm {
        RegistrationForm {
            username: "JohnDoe".to_string(),
            email: " John@Example.com ".to_string(),
            role: Some(Role::Student),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_config_urls() {
        let config = AuthConfig::new("https://auth.example.com/");

        assert_eq!(config.login_url(), "https://auth.example.com/api/auth/login");
        assert_eq!(
            config.register_url(),
            "https://auth.example.com/api/auth/register"
        );
    }

    #[test]
    fn test_registration_requires_role() {
        let form = RegistrationForm {
            role: None,
            ..registration()
        };

        assert!(matches!(form.validate(), Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_login_empty_email_sends_nothing() {
        let client = client(MockTransport::replying(200, "{}"));

        let err = client
            .login(&LoginForm::new("", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(err.to_string(), "Please enter both email and password.");
        assert_eq!(client.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_login_student_persists_and_routes() {
        let client = client(MockTransport::replying(
            200,
            r#"{"access_token":"t","email":"a@b.com","role":"student"}"#,
        ));

        let success = client
            .login(&LoginForm::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(success.destination.path(), "/student/dashboard");
        assert_eq!(success.role, Role::Student);
        assert_eq!(
            client.session().get(ACCESS_TOKEN_KEY).as_deref(),
            Some("t")
        );
        assert_eq!(
            client.session().get(USER_EMAIL_KEY).as_deref(),
            Some("a@b.com")
        );

        let calls = client.transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "http://auth.test/api/auth/login");
        assert_eq!(
            calls[0].1,
            serde_json::json!({"email": "a@b.com", "password": "pw"})
        );
    }

    #[tokio::test]
    async fn test_login_admin_routes_to_teacher() {
        let client = client(MockTransport::replying(
            200,
            r#"{"access_token":"t","email":"a@b.com","role":"admin"}"#,
        ));

        let success = client
            .login(&LoginForm::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(success.destination, Destination::TeacherDashboard);
    }

    #[tokio::test]
    async fn test_login_unknown_role() {
        let client = client(MockTransport::replying(
            200,
            r#"{"access_token":"t","email":"a@b.com","role":"guest"}"#,
        ));

        let err = client
            .login(&LoginForm::new("a@b.com", "pw"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UnrecognizedRole(ref r) if r == "guest"));
        assert_eq!(
            err.to_string(),
            "Login successful, but role is unrecognized. Contact support."
        );

        // Saved before the role check
        assert_eq!(
            client.session().get(ACCESS_TOKEN_KEY).as_deref(),
            Some("t")
        );
        assert_eq!(
            client.session().get(USER_EMAIL_KEY).as_deref(),
            Some("a@b.com")
        );
    }

    /// Store whose writes always fail, e.g. storage disabled by the browser.
    struct ReadOnlySessionStore;

    impl SessionStore for ReadOnlySessionStore {
        fn load(&self) -> Option<StoredSession> {
            None
        }

        fn save(&self, _session: &StoredSession) -> std::result::Result<(), SessionError> {
            Err(SessionError::Unavailable("quota exceeded".to_string()))
        }

        fn clear(&self) {}
    }

    #[tokio::test]
    async fn test_login_session_save_failure() {
        let client = AuthClient::new(
            AuthConfig::new("http://auth.test"),
            MockTransport::replying(
                200,
                r#"{"access_token":"t","email":"a@b.com","role":"student"}"#,
            ),
            ReadOnlySessionStore,
        );

        let result = client.login(&LoginForm::new("a@b.com", "pw")).await;

        let Err(err) = result else {
            panic!("login must fail when the session cannot be saved");
        };
        assert!(matches!(
            err,
            AuthError::Session(SessionError::Unavailable(_))
        ));
        assert_eq!(
            err.to_string(),
            "Could not save your session: session storage unavailable: quota exceeded"
        );
        assert_eq!(client.transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_login_server_detail() {
        let client = client(MockTransport::replying(
            401,
            r#"{"detail":"Invalid email or password"}"#,
        ));

        let err = client
            .login(&LoginForm::new("a@b.com", "bad"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Server(_)));
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(client.session().is_empty());
    }

    #[tokio::test]
    async fn test_login_server_fallback() {
        let client = client(MockTransport::replying(500, "Internal Server Error"));

        let err = client
            .login(&LoginForm::new("a@b.com", "pw"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Login failed. Check your credentials.");
    }

    #[tokio::test]
    async fn test_login_network_failure() {
        let client = client(MockTransport::failing());

        let err = client
            .login(&LoginForm::new("a@b.com", "pw"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Transport {
                source: TransportError::Network(_),
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Server not reachable. Please check your network or try again later."
        );
        assert_eq!(client.transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_login_undecodable_success() {
        let client = client(MockTransport::replying(200, "not json"));

        let err = client
            .login(&LoginForm::new("a@b.com", "pw"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Transport {
                source: TransportError::Decode(_),
                ..
            }
        ));
        assert!(client.session().is_empty());
    }

    #[tokio::test]
    async fn test_register_success() {
        let client = client(MockTransport::replying(201, r#"{"id":7}"#));

        let destination = client.register(&registration()).await.unwrap();

        assert_eq!(destination.path(), "/login");
        let calls = client.transport.calls.borrow();
        assert_eq!(calls[0].0, "http://auth.test/api/auth/register");
        assert_eq!(
            calls[0].1,
            serde_json::json!({
                "username": "JohnDoe",
                "email": "john@example.com",
                "password": "hunter22",
                "role": "student",
            })
        );
    }

    #[tokio::test]
    async fn test_register_missing_field() {
        let client = client(MockTransport::replying(201, ""));
        let form = RegistrationForm {
            username: String::new(),
            ..registration()
        };

        let err = client.register(&form).await.unwrap_err();

        assert_eq!(err.to_string(), "All fields are required.");
        assert_eq!(client.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_register_validation_list() {
        let client = client(MockTransport::replying(
            422,
            r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#,
        ));

        let err = client.register(&registration()).await.unwrap_err();

        assert_eq!(err.to_string(), "value is not a valid email address");
    }

    #[tokio::test]
    async fn test_register_conflict_string() {
        let client = client(MockTransport::replying(
            400,
            r#"{"detail":"Email already registered"}"#,
        ));

        let err = client.register(&registration()).await.unwrap_err();

        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn test_register_fallback() {
        let client = client(MockTransport::replying(503, ""));

        let err = client.register(&registration()).await.unwrap_err();

        assert_eq!(err.to_string(), "Registration failed");
    }

    #[tokio::test]
    async fn test_register_network_failure() {
        let client = client(MockTransport::failing());

        let err = client.register(&registration()).await.unwrap_err();

        assert_eq!(err.to_string(), "Backend server not reachable.");
    }

    #[test]
    fn test_logout_clears_session() {
        let store = MemorySessionStore::new();
        store
            .save(&StoredSession {
                access_token: "t".to_string(),
                email: "a@b.com".to_string(),
            })
            .unwrap();

        let destination = logout(&store);

        assert_eq!(destination.path(), "/");
        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert!(store.get(USER_EMAIL_KEY).is_none());
    }

    #[tokio::test]
    async fn test_logout_after_login() {
        let client = client(MockTransport::replying(
            200,
            r#"{"access_token":"t","email":"a@b.com","role":"teacher"}"#,
        ));
        client
            .login(&LoginForm::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(client.logout(), Destination::Landing);
        assert!(client.session().load().is_none());
    }
}
