//! Injectable session context owning credentials and the prompt-open flag
//!
//! Both the HTTP client and the center guard receive a `SessionContext` by
//! construction instead of reaching for ambient globals. The narrow interface
//! keeps the last-write-wins behavior of concurrent token rotation visible:
//! two in-flight responses that both carry rotated tokens leave storage
//! holding whichever wrote last, with no merge and no version check.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::token_store::{normalize, CredentialStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::types::{CenterId, CredentialPair};

/// Session-scoped state shared by the client and every guard instance.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
    prompt_open: Arc<AtomicBool>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            prompt_open: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current access token, normalized: empty or `"undefined"` reads as absent.
    pub fn access_token(&self) -> Option<String> {
        normalize(self.store.read(ACCESS_TOKEN_KEY))
    }

    pub fn set_access_token(&self, token: &str) {
        self.store.write(ACCESS_TOKEN_KEY, token);
    }

    /// Current refresh token, normalized the same way as the access token.
    pub fn refresh_token(&self) -> Option<String> {
        normalize(self.store.read(REFRESH_TOKEN_KEY))
    }

    pub fn set_refresh_token(&self, token: &str) {
        self.store.write(REFRESH_TOKEN_KEY, token);
    }

    /// Both tokens in one read, for callers that snapshot the pair.
    pub fn credentials(&self) -> CredentialPair {
        CredentialPair {
            access_token: self.access_token(),
            refresh_token: self.refresh_token(),
        }
    }

    /// Drop both tokens. Called by the logout flow.
    pub fn clear_credentials(&self) {
        self.store.delete(ACCESS_TOKEN_KEY);
        self.store.delete(REFRESH_TOKEN_KEY);
    }

    /// Whether a center-selection prompt is currently open anywhere in the
    /// application. One prompt at a time, across all guard mounts.
    pub fn is_prompt_open(&self) -> bool {
        self.prompt_open.load(Ordering::SeqCst)
    }

    pub fn set_prompt_open(&self, open: bool) {
        self.prompt_open.store(open, Ordering::SeqCst);
    }
}

/// Process-wide selected-center store. Guards only read it; selection
/// screens write it.
#[derive(Clone, Default)]
pub struct SelectedCenter {
    id: Arc<AtomicU64>,
}

impl SelectedCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected center, or `None` while the zero sentinel is held.
    pub fn get(&self) -> Option<CenterId> {
        match self.id.load(Ordering::SeqCst) {
            0 => None,
            id => Some(id),
        }
    }

    pub fn select(&self, id: CenterId) {
        self.id.store(id, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.id.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::MemoryStore;

    fn session() -> (SessionContext, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SessionContext::new(store.clone()), store)
    }

    #[test]
    fn test_tokens_normalized_on_read() {
        let (session, store) = session();

        store.write(ACCESS_TOKEN_KEY, "undefined");
        store.write(REFRESH_TOKEN_KEY, "");
        assert_eq!(session.access_token(), None);
        assert_eq!(session.refresh_token(), None);
        assert!(session.credentials().is_empty());

        session.set_access_token("abc");
        assert_eq!(session.access_token(), Some("abc".to_string()));
    }

    #[test]
    fn test_clear_credentials_drops_both() {
        let (session, _store) = session();
        session.set_access_token("a");
        session.set_refresh_token("r");
        session.clear_credentials();
        assert!(session.credentials().is_empty());
    }

    #[test]
    fn test_prompt_flag_shared_across_clones() {
        let (session, _store) = session();
        let other = session.clone();

        assert!(!session.is_prompt_open());
        session.set_prompt_open(true);
        assert!(other.is_prompt_open());
        other.set_prompt_open(false);
        assert!(!session.is_prompt_open());
    }

    #[test]
    fn test_selected_center_zero_sentinel() {
        let selected = SelectedCenter::new();
        assert_eq!(selected.get(), None);

        selected.select(42);
        assert_eq!(selected.get(), Some(42));

        selected.clear();
        assert_eq!(selected.get(), None);
    }
}
