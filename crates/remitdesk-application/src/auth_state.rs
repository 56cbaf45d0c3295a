//! Observable authentication state.

use remitdesk_core::session::SessionStorage;
use tokio::sync::watch;

/// Whether an operator is signed in, derived from the session store.
///
/// Writers are limited to [`AuthState::logout`], [`AuthState::hydrate`] and
/// the sign-in path of the auth use case. Readers either poll
/// [`AuthState::is_authenticated`] or [`AuthState::subscribe`] to changes.
pub struct AuthState {
    storage: SessionStorage,
    authenticated: watch::Sender<bool>,
    loading: watch::Sender<bool>,
}

impl AuthState {
    /// Starts from whatever the store holds right now.
    pub fn new(storage: SessionStorage) -> Self {
        let (authenticated, _) = watch::channel(storage.check_token());
        let (loading, _) = watch::channel(false);
        Self {
            storage,
            authenticated,
            loading,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.borrow()
    }

    /// True while an auth request is in flight.
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Clears the session store and flips the flag off. Does not navigate.
    pub fn logout(&self) {
        if let Err(e) = self.storage.clear_auth() {
            tracing::warn!("Failed to clear session on logout: {}", e);
        }
        self.authenticated.send_replace(false);
    }

    /// Re-reads the flag from the store, e.g. after the HTTP client cleared
    /// it on a 401.
    pub fn hydrate(&self) -> bool {
        let authenticated = self.storage.check_token();
        self.authenticated.send_replace(authenticated);
        authenticated
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.loading.send_replace(loading);
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("authenticated", &self.is_authenticated())
            .field("loading", &self.is_loading())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_follows_store() {
        let storage = SessionStorage::in_memory();
        assert!(!AuthState::new(storage.clone()).is_authenticated());

        storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();
        assert!(AuthState::new(storage).is_authenticated());
    }

    #[test]
    fn test_logout_clears_store_and_flag() {
        let storage = SessionStorage::in_memory();
        storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();
        let state = AuthState::new(storage.clone());

        state.logout();

        assert!(!state.is_authenticated());
        assert!(!storage.check_token());
    }

    #[test]
    fn test_hydrate_picks_up_external_clear() {
        let storage = SessionStorage::in_memory();
        storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();
        let state = AuthState::new(storage.clone());

        storage.clear_auth().unwrap();
        assert!(state.is_authenticated());
        assert!(!state.hydrate());
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let storage = SessionStorage::in_memory();
        let state = AuthState::new(storage.clone());
        let mut rx = state.subscribe();

        storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();
        assert!(state.hydrate());
        rx.changed().await.unwrap();
        assert!(*rx.borrow());

        state.logout();
        rx.changed().await.unwrap();
        assert!(!*rx.borrow());
    }
}
