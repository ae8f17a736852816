//! Session state shared by every request the console makes.
//!
//! The backend issues an opaque bearer token at login; the console keeps it in
//! the `token` cookie and presents it on every request. The [`Session`] trait
//! abstracts over where the token actually lives so the API client never
//! touches a global cookie store directly: the browser build plugs in a
//! cookie-backed implementation, tests plug in [`MemorySession`].

use std::cell::RefCell;

/// Cookie that holds the bearer token between page loads.
pub const TOKEN_COOKIE: &str = "token";

/// Route the console navigates to when the session is invalidated.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session storage is unavailable")]
    StorageUnavailable,
    #[error("Failed to read session token: {0}")]
    ReadFailed(String),
}

/// Access to the current session token and to the forced-logout actions the
/// response interceptor needs.
///
/// `token` is fallible on purpose: if the storage itself cannot be read the
/// request must be aborted rather than silently sent unauthenticated.
pub trait Session {
    /// The current bearer token, if a user is logged in.
    fn token(&self) -> Result<Option<String>, SessionError>;

    /// Replaces the stored token. Called by the login flow.
    fn store(&self, token: &str);

    /// Deletes the stored token.
    fn clear(&self);

    /// Navigates the whole page to `target`, abandoning the current view.
    fn redirect(&self, target: &str);
}

/// In-memory [`Session`] used by the test suite and by native tooling.
///
/// Redirects are recorded instead of performed so tests can assert on the
/// navigation target.
#[derive(Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
    redirects: RefCell<Vec<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let session = Self::new();
        session.store(token);
        session
    }

    /// Every redirect issued through this session, oldest first.
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Session for MemorySession {
    fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.borrow().clone())
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }

    fn redirect(&self, target: &str) {
        self.redirects.borrow_mut().push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_replaces_token() {
        let session = MemorySession::new();
        assert_eq!(session.token().unwrap(), None);

        session.store("abc");
        assert_eq!(session.token().unwrap(), Some("abc".to_string()));

        session.store("def");
        assert_eq!(session.token().unwrap(), Some("def".to_string()));
    }

    #[test]
    fn test_clear_removes_token() {
        let session = MemorySession::with_token("abc");
        session.clear();
        assert_eq!(session.token().unwrap(), None);
    }

    #[test]
    fn test_redirects_are_recorded_in_order() {
        let session = MemorySession::new();
        session.redirect("/login");
        session.redirect("/centers");
        assert_eq!(session.redirects(), vec!["/login", "/centers"]);
    }
}
