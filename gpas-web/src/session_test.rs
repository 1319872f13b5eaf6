//! Tests for the session store state machine
//!
//! Exercises hydration from durable storage, the identity/credential
//! co-presence invariant, logout idempotence, and the local password
//! validation short-circuit, all over the in-memory vault.

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::session::{
        validate_password, MemoryVault, SessionStore, SessionVault, MIN_PASSWORD_LEN, TOKEN_KEY,
        USER_KEY,
    };
    use std::sync::Arc;

    fn store_with_vault(vault: Arc<MemoryVault>) -> SessionStore {
        SessionStore::with_vault("http://localhost:5001", vault)
    }

    fn assert_invariant(store: &SessionStore) {
        let state = store.snapshot();
        assert_eq!(
            state.user.is_some(),
            state.token.is_some(),
            "identity and credential must be set or cleared together"
        );
    }

    /// Tests that a fresh store is initializing and anonymous.
    #[test]
    fn test_fresh_store_is_initializing() {
        let store = store_with_vault(Arc::new(MemoryVault::default()));
        assert!(store.is_initializing());
        assert!(!store.is_authenticated());
        assert_invariant(&store);
    }

    /// Tests hydration when both durable entries are present and valid.
    #[test]
    fn test_initialize_restores_persisted_session() {
        let vault = Arc::new(MemoryVault::default());
        vault.write(TOKEN_KEY, "tok123");
        vault.write(USER_KEY, r#"{"id":1,"name":"Ana","email":"a@b.com"}"#);

        let store = store_with_vault(vault);
        store.initialize();

        assert!(!store.is_initializing());
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok123"));
        let user = store.user().unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ana");
        assert_invariant(&store);
    }

    /// Tests that empty storage hydrates to anonymous, not an error.
    #[test]
    fn test_initialize_with_empty_storage() {
        let store = store_with_vault(Arc::new(MemoryVault::default()));
        store.initialize();

        assert!(!store.is_initializing());
        assert!(!store.is_authenticated());
        assert_invariant(&store);
    }

    /// Tests that a corrupt user entry is treated as absent.
    #[test]
    fn test_initialize_with_corrupt_user_entry() {
        let vault = Arc::new(MemoryVault::default());
        vault.write(TOKEN_KEY, "tok123");
        vault.write(USER_KEY, "{not json");

        let store = store_with_vault(vault);
        store.initialize();

        assert!(!store.is_initializing());
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert_invariant(&store);
    }

    /// Tests that a lone token without a user entry does not authenticate.
    #[test]
    fn test_initialize_with_token_but_no_user() {
        let vault = Arc::new(MemoryVault::default());
        vault.write(TOKEN_KEY, "tok123");

        let store = store_with_vault(vault);
        store.initialize();

        assert!(!store.is_authenticated());
        assert_invariant(&store);
    }

    /// Tests that logout clears memory and both durable entries.
    #[test]
    fn test_logout_clears_session_and_storage() {
        let vault = Arc::new(MemoryVault::default());
        vault.write(TOKEN_KEY, "tok123");
        vault.write(USER_KEY, r#"{"id":1,"name":"Ana"}"#);

        let store = store_with_vault(vault.clone());
        store.initialize();
        assert!(store.is_authenticated());

        store.logout();

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(vault.read(TOKEN_KEY).is_none());
        assert!(vault.read(USER_KEY).is_none());
        assert_invariant(&store);
    }

    /// Tests that logging out while already anonymous is a no-op.
    #[test]
    fn test_logout_is_idempotent() {
        let store = store_with_vault(Arc::new(MemoryVault::default()));
        store.initialize();

        store.logout();
        let first = store.snapshot();
        store.logout();
        let second = store.snapshot();

        assert_eq!(first, second);
        assert!(!store.is_authenticated());
        assert_invariant(&store);
    }

    /// Tests the hydration round trip across a simulated restart.
    #[test]
    fn test_session_survives_restart() {
        let vault = Arc::new(MemoryVault::default());
        vault.write(TOKEN_KEY, "tok123");
        vault.write(USER_KEY, r#"{"id":1,"name":"Ana"}"#);

        let first = store_with_vault(vault.clone());
        first.initialize();
        let before = (first.token(), first.user());

        // New process, same durable storage.
        let second = store_with_vault(vault);
        second.initialize();

        assert_eq!((second.token(), second.user()), before);
        assert_invariant(&second);
    }

    /// Tests the local password policy.
    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("123456").is_ok());
        let err = validate_password("abc").unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ))
        );
    }

    /// Tests that a short password short-circuits register before any
    /// network call and leaves the session untouched.
    #[test]
    fn test_register_short_circuits_on_short_password() {
        let store = store_with_vault(Arc::new(MemoryVault::default()));
        store.initialize();

        let result = futures::executor::block_on(store.register("Ana", "a@b.com", "abc"));

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(!store.is_authenticated());
        assert_invariant(&store);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use crate::session::{BrowserVault, SessionVault, TOKEN_KEY, USER_KEY};
    use gloo_storage::{LocalStorage, Storage};
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    /// `localStorage` must hold the bare token string and plain user
    /// JSON, with no extra encoding layer around either entry.
    #[wasm_bindgen_test]
    fn test_browser_vault_stores_raw_strings() {
        let vault = BrowserVault;

        vault.write(TOKEN_KEY, "tok123");
        vault.write(USER_KEY, r#"{"id":1,"name":"Ana"}"#);

        assert_eq!(
            LocalStorage::raw().get_item(TOKEN_KEY).unwrap().as_deref(),
            Some("tok123")
        );
        assert_eq!(
            LocalStorage::raw().get_item(USER_KEY).unwrap().as_deref(),
            Some(r#"{"id":1,"name":"Ana"}"#)
        );
        assert_eq!(vault.read(TOKEN_KEY).as_deref(), Some("tok123"));

        vault.delete(TOKEN_KEY);
        vault.delete(USER_KEY);
        assert_eq!(vault.read(TOKEN_KEY), None);
        assert_eq!(vault.read(USER_KEY), None);
    }

    /// An entry persisted by an earlier client as a raw string hydrates
    /// unchanged through the vault.
    #[wasm_bindgen_test]
    fn test_browser_vault_reads_entries_written_raw() {
        LocalStorage::raw().set_item(TOKEN_KEY, "tok123").unwrap();

        let vault = BrowserVault;
        assert_eq!(vault.read(TOKEN_KEY).as_deref(), Some("tok123"));

        vault.delete(TOKEN_KEY);
    }
}
