//! Session-scoped storage for the bearer token

use std::sync::RwLock;

/// Holds the current bearer token for the lifetime of the client.
///
/// One store per client instance, memory only. The web frontend this
/// client descends from kept the token in per-tab session storage;
/// dropping the client is the Rust equivalent of closing the tab, and the
/// credential goes with it.
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token, replacing any previous one.
    pub fn set(&self, token: &str) {
        let mut guard = self.token.write().unwrap();
        *guard = Some(token.to_string());
    }

    /// The current token, if any.
    pub fn get(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Forget the stored token.
    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap();
        *guard = None;
    }
}
