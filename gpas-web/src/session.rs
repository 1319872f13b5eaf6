//! Single source of truth for "who is logged in".
//!
//! The store owns the bearer token and the signed-in [`User`], mirrors
//! both to durable browser storage, and talks to the auth endpoints.
//! Everything else reads the credential through [`SessionStore::token`]
//! at call time, so a login or logout between two calls is honored
//! immediately.

use gloo_storage::{LocalStorage, Storage};
use reqwest::Client;
use shared::{AuthResponse, LoginRequest, RegisterRequest, User};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;

/// Durable storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "gpas4_token";

/// Durable storage key holding the JSON-serialized [`User`].
pub const USER_KEY: &str = "gpas4_user";

/// Shortest password `register` accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

#[cfg(target_arch = "wasm32")]
fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log(_message: &str) {}

/// The composite session: identity and credential are always set or
/// cleared together; `initializing` is true only during the one-time
/// startup read of durable storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// The signed-in account, if any.
    pub user: Option<User>,
    /// Bearer token for API calls, if any.
    pub token: Option<String>,
    /// True until [`SessionStore::initialize`] has run once.
    pub initializing: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            initializing: true,
        }
    }
}

/// Durable key-value storage behind the session store.
///
/// The browser implementation wraps `localStorage`; tests swap in an
/// in-memory map so the state machine can be exercised natively.
pub trait SessionVault {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`.
    fn write(&self, key: &str, value: &str);
    /// Remove the entry under `key`; removing a missing key is fine.
    fn delete(&self, key: &str);
}

/// `localStorage`-backed vault used in the browser.
///
/// Goes through the raw storage API: the token is stored as the bare
/// string and the user as plain JSON, with no extra encoding layer, so
/// entries written by earlier clients hydrate unchanged.
#[derive(Debug, Default)]
pub struct BrowserVault;

impl SessionVault for BrowserVault {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            console_log(&format!("session: failed to persist {key}"));
        }
    }

    fn delete(&self, key: &str) {
        if LocalStorage::raw().remove_item(key).is_err() {
            console_log(&format!("session: failed to remove {key}"));
        }
    }
}

/// In-memory vault for tests.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionVault for MemoryVault {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn delete(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Owned session store, passed by handle to every component that needs it.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<Mutex<SessionState>>,
    vault: Arc<dyn SessionVault>,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.snapshot())
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl SessionStore {
    /// Create a store backed by browser `localStorage`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_vault(base_url, Arc::new(BrowserVault))
    }

    /// Create a store with an explicit vault. Tests use [`MemoryVault`].
    #[must_use]
    pub fn with_vault(base_url: &str, vault: Arc<dyn SessionVault>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            vault,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// One-time startup hydration from durable storage.
    ///
    /// Restores the session only when both entries are present and the
    /// user entry parses; anything else is treated as logged-out. Always
    /// leaves `initializing == false`.
    pub fn initialize(&self) {
        let token = self.vault.read(TOKEN_KEY);
        let user = self
            .vault
            .read(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());

        if let Ok(mut state) = self.state.lock() {
            match (token, user) {
                (Some(token), Some(user)) => {
                    state.token = Some(token);
                    state.user = Some(user);
                }
                _ => {
                    state.token = None;
                    state.user = None;
                }
            }
            state.initializing = false;
        }
    }

    /// Authenticate against `/api/auth/login`.
    ///
    /// On success the session is stored in memory and durable storage and
    /// the signed-in [`User`] is returned. On any failure the session is
    /// left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.post_auth("/api/auth/login", &request).await?;
        self.store_session(response.access_token, response.user.clone());
        Ok(response.user)
    }

    /// Create an account via `/api/auth/register`; same contract as
    /// [`SessionStore::login`], with a local password-length check first.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        validate_password(password)?;
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.post_auth("/api/auth/register", &request).await?;
        self.store_session(response.access_token, response.user.clone());
        Ok(response.user)
    }

    /// Clear the session. Infallible and idempotent.
    pub fn logout(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.user = None;
            state.token = None;
        }
        self.vault.delete(TOKEN_KEY);
        self.vault.delete(USER_KEY);
    }

    /// Current bearer token, read fresh on every call.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.lock().ok().and_then(|state| state.token.clone())
    }

    /// The signed-in account, if any.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.lock().ok().and_then(|state| state.user.clone())
    }

    /// True between a successful login/register and the next logout.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state
            .lock()
            .map(|state| state.token.is_some())
            .unwrap_or(false)
    }

    /// True until the startup hydration has completed.
    #[must_use]
    pub fn is_initializing(&self) -> bool {
        self.state
            .lock()
            .map(|state| state.initializing)
            .unwrap_or(false)
    }

    /// Copy of the full state, for assertions and debugging.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state
            .lock()
            .map(|state| state.clone())
            .unwrap_or_default()
    }

    /// Single-attempt POST to an auth endpoint; no retry, no timeout.
    async fn post_auth<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthResponse, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &text));
        }

        serde_json::from_str::<AuthResponse>(&text)
            .map_err(|err| ApiError::Parse(err.to_string()))
    }

    /// Replace the session atomically and mirror it to durable storage.
    fn store_session(&self, token: String, user: User) {
        match serde_json::to_string(&user) {
            Ok(json) => {
                self.vault.write(TOKEN_KEY, &token);
                self.vault.write(USER_KEY, &json);
            }
            Err(err) => console_log(&format!("session: failed to serialize user: {err}")),
        }
        if let Ok(mut state) = self.state.lock() {
            state.token = Some(token);
            state.user = Some(user);
        }
    }
}

/// Local password policy applied before `register` touches the network.
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SubscriptionTier;

    fn ana() -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
            subscription_tier: SubscriptionTier::Professional,
            auto_trading_enabled: true,
        }
    }

    /// A successful auth response ends up in memory and in both vault
    /// entries, token as the bare string and user as plain JSON.
    #[test]
    fn test_store_session_writes_memory_and_vault() {
        let vault = Arc::new(MemoryVault::default());
        let store = SessionStore::with_vault("http://localhost:5001", vault.clone());
        store.initialize();
        assert!(!store.is_authenticated());

        store.store_session("tok123".to_string(), ana());

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok123"));
        assert_eq!(store.user(), Some(ana()));

        assert_eq!(vault.read(TOKEN_KEY).as_deref(), Some("tok123"));
        let persisted: User =
            serde_json::from_str(&vault.read(USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted, ana());

        let state = store.snapshot();
        assert_eq!(state.user.is_some(), state.token.is_some());
    }

    /// What one store persists, a fresh store hydrates verbatim.
    #[test]
    fn test_stored_session_hydrates_in_new_store() {
        let vault = Arc::new(MemoryVault::default());
        let first = SessionStore::with_vault("http://localhost:5001", vault.clone());
        first.initialize();
        first.store_session("tok123".to_string(), ana());

        let second = SessionStore::with_vault("http://localhost:5001", vault);
        second.initialize();

        assert_eq!(second.token().as_deref(), Some("tok123"));
        assert_eq!(second.user(), Some(ana()));
    }
}
