//! Time-scoped anti-forgery tokens for admin forms.
//!
//! # Design
//! - Tokens are bound to an action string and expire after a fixed window.
//! - Verification does not consume: the same rendered form may be
//!   resubmitted within the window, matching the host platform's contract.
//! - Expired entries are pruned whenever a new token is issued.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use rand::Rng;
use rand::distr::Alphanumeric;

/// Lifetime of an issued token.
pub const NONCE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const TOKEN_LEN: usize = 40;

#[derive(Debug)]
struct NonceEntry {
    action: String,
    expires_at: Instant,
}

/// In-process registry of issued anti-forgery tokens.
#[derive(Debug)]
pub struct NonceRegistry {
    entries: Mutex<HashMap<String, NonceEntry>>,
    ttl: Duration,
}

impl NonceRegistry {
    /// Create a registry with the standard token lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(NONCE_TTL)
    }

    /// Create a registry with a custom token lifetime.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Issue a fresh token scoped to `action`.
    pub fn issue(&self, action: &str) -> String {
        let token: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        let now = Instant::now();
        let mut entries = self.entries();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            token.clone(),
            NonceEntry {
                action: action.to_string(),
                expires_at: now + self.ttl,
            },
        );
        token
    }

    /// Whether `token` was issued for `action` and has not expired.
    #[must_use]
    pub fn verify(&self, token: &str, action: &str) -> bool {
        let now = Instant::now();
        self.entries()
            .get(token)
            .is_some_and(|entry| entry.action == action && entry.expires_at > now)
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, NonceEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NonceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_for_its_action() {
        let registry = NonceRegistry::new();
        let token = registry.issue("settings-form");
        assert!(registry.verify(&token, "settings-form"));
    }

    #[test]
    fn token_is_scoped_to_one_action() {
        let registry = NonceRegistry::new();
        let token = registry.issue("settings-form");
        assert!(!registry.verify(&token, "other-form"));
    }

    #[test]
    fn unknown_token_fails_verification() {
        let registry = NonceRegistry::new();
        assert!(!registry.verify("made-up", "settings-form"));
    }

    #[test]
    fn expired_token_fails_verification() {
        let registry = NonceRegistry::with_ttl(Duration::ZERO);
        let token = registry.issue("settings-form");
        assert!(!registry.verify(&token, "settings-form"));
    }

    #[test]
    fn verification_does_not_consume() {
        let registry = NonceRegistry::new();
        let token = registry.issue("settings-form");
        assert!(registry.verify(&token, "settings-form"));
        assert!(registry.verify(&token, "settings-form"));
    }
}
