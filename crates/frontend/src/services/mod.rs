//! Browser implementations of the auth client seams.

mod session;
mod transport;

pub use session::{BrowserSessionStore, SessionProvider, use_session};
pub use transport::GlooTransport;

use auth_client::{AuthClient, AuthConfig};

/// Auth client wired to the browser's fetch and localStorage.
pub fn browser_auth_client() -> AuthClient<GlooTransport, BrowserSessionStore> {
    AuthClient::new(AuthConfig::default(), GlooTransport, BrowserSessionStore)
}
