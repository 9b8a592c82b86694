//! Single-user session gate — in-memory sessions and one-time anti-forgery
//! tokens.
//!
//! Sessions and tokens live in process memory only: restarting the daemon
//! logs the user out. Credentials come from configuration and are compared
//! directly; password hashing and multi-user accounts are out of scope for
//! a single-user, self-hosted deployment.

use std::collections::HashSet;
use std::sync::Mutex;

use axum_extra::extract::cookie::CookieJar;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "homeport_session";

/// Configured credentials for the single dashboard user.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// In-memory session store gating the document endpoints.
pub struct SessionGate {
    credentials: Credentials,
    sessions: Mutex<HashSet<String>>,
    csrf_tokens: Mutex<HashSet<String>>,
}

impl SessionGate {
    /// Create a gate for the given credentials with no open sessions.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            sessions: Mutex::new(HashSet::new()),
            csrf_tokens: Mutex::new(HashSet::new()),
        }
    }

    /// Issue a single-use anti-forgery token for the login form.
    pub fn issue_csrf_token(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.csrf_tokens
            .lock()
            .expect("csrf token set poisoned")
            .insert(token.clone());
        token
    }

    /// Consume a previously issued token, returning whether it was valid.
    /// Tokens are single-use: a second consumption of the same token fails.
    pub fn take_csrf_token(&self, token: &str) -> bool {
        self.csrf_tokens
            .lock()
            .expect("csrf token set poisoned")
            .remove(token)
    }

    /// Verify credentials and open a new session, returning its token.
    pub fn login(&self, username: &str, password: &str) -> Option<String> {
        if username != self.credentials.username || password != self.credentials.password {
            return None;
        }
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions
            .lock()
            .expect("session set poisoned")
            .insert(token.clone());
        Some(token)
    }

    /// Close the session carried by the jar, if any.
    pub fn logout(&self, jar: &CookieJar) {
        if let Some(cookie) = jar.get(SESSION_COOKIE) {
            self.sessions
                .lock()
                .expect("session set poisoned")
                .remove(cookie.value());
        }
    }

    /// Whether the jar carries a live session.
    #[must_use]
    pub fn is_authenticated(&self, jar: &CookieJar) -> bool {
        jar.get(SESSION_COOKIE).is_some_and(|cookie| {
            self.sessions
                .lock()
                .expect("session set poisoned")
                .contains(cookie.value())
        })
    }
}
