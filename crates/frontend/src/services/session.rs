//! Session persisted in `localStorage` and shared through a Yew context.

use auth_client::{
    ACCESS_TOKEN_KEY, SessionError, SessionStore, StoredSession, USER_EMAIL_KEY,
};
use core_types::Destination;
use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

/// Session store backed by the browser's `localStorage`.
///
/// Entries are stored as plain strings, not JSON-encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<StoredSession> {
        let storage = LocalStorage::raw();
        let access_token = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()?;
        let email = storage.get_item(USER_EMAIL_KEY).ok().flatten()?;

        Some(StoredSession {
            access_token,
            email,
        })
    }

    fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        let storage = LocalStorage::raw();
        storage
            .set_item(ACCESS_TOKEN_KEY, &session.access_token)
            .and_then(|_| storage.set_item(USER_EMAIL_KEY, &session.email))
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}

/// Current session as seen by the component tree.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    current: UseStateHandle<Option<StoredSession>>,
}

impl SessionContext {
    pub fn current(&self) -> Option<StoredSession> {
        (*self.current).clone()
    }

    /// Re-read the store after a login wrote to it.
    pub fn refresh(&self) {
        self.current.set(BrowserSessionStore.load());
    }

    /// Clear the store and forget the session.
    pub fn logout(&self) -> Destination {
        let destination = auth_client::logout(&BrowserSessionStore);
        log::info!("session cleared");
        self.current.set(None);
        destination
    }
}

/// Properties for SessionProvider.
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

/// Provides the [`SessionContext`] to its children.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let current = use_state(|| BrowserSessionStore.load());
    let context = SessionContext { current };

    html! {
        <ContextProvider<SessionContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// Access the session from inside a [`SessionProvider`].
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session called outside SessionProvider")
}
