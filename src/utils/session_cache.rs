use crate::session::Page;
use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

/// Process-local map from session-id cookie value to the page that session is
/// on. Entries expire after the configured TTL; an expired or unknown session
/// simply starts over on the login page. Nothing here survives a restart.
#[derive(Clone)]
pub struct SessionStore {
    pages: Cache<String, Page>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            pages: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn new_session_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Current page for a session, defaulting to the login page.
    pub async fn page(&self, session_id: &str) -> Page {
        self.pages.get(session_id).await.unwrap_or_default()
    }

    pub async fn set_page(&self, session_id: &str, page: Page) {
        self.pages.insert(session_id.to_string(), page).await;
    }

    /// Drops the session entirely; the next render sees the login page.
    pub async fn reset(&self, session_id: &str) {
        self.pages.invalidate(session_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn unknown_session_starts_on_login() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert_eq!(block_on(store.page("nope")), Page::Login);
    }

    #[test]
    fn set_then_reset_roundtrip() {
        let store = SessionStore::new(Duration::from_secs(60));
        block_on(store.set_page("s1", Page::AdminPanel));
        assert_eq!(block_on(store.page("s1")), Page::AdminPanel);

        block_on(store.reset("s1"));
        assert_eq!(block_on(store.page("s1")), Page::Login);
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionStore::new_session_id(), SessionStore::new_session_id());
    }
}
