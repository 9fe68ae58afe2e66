//! Persisted session collaborator.
//!
//! The session is a pair of string entries (`access_token`,
//! `user_email`) written once per login and cleared together on logout.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the signed-in email.
pub const USER_EMAIL_KEY: &str = "user_email";

/// Errors from session storage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// The persisted part of a login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub access_token: String,
    pub email: String,
}

/// Read/write/clear access to the persisted session.
pub trait SessionStore {
    /// Current session, if both entries are present.
    fn load(&self) -> Option<StoredSession>;

    /// Persist both entries, replacing any previous session.
    fn save(&self, session: &StoredSession) -> Result<(), SessionError>;

    /// Remove every persisted entry.
    fn clear(&self);
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw entry by storage key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Insert a raw entry, e.g. to simulate unrelated data.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<StoredSession> {
        Some(StoredSession {
            access_token: self.get(ACCESS_TOKEN_KEY)?,
            email: self.get(USER_EMAIL_KEY)?,
        })
    }

    fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        self.insert(ACCESS_TOKEN_KEY, &session.access_token);
        self.insert(USER_EMAIL_KEY, &session.email);
        Ok(())
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> StoredSession {
        StoredSession {
            access_token: "t".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let store = MemorySessionStore::new();
        store.save(&session()).unwrap();

        assert_eq!(store.load(), Some(session()));
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("t"));
        assert_eq!(store.get(USER_EMAIL_KEY).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_load_requires_both_entries() {
        let store = MemorySessionStore::new();
        store.insert(ACCESS_TOKEN_KEY, "t");

        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = MemorySessionStore::new();
        store.save(&session()).unwrap();
        store.insert("theme", "dark");

        store.clear();

        assert!(store.is_empty());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemorySessionStore::new();
        let view = store.clone();

        store.save(&session()).unwrap();

        assert_eq!(view.load(), Some(session()));
    }
}
