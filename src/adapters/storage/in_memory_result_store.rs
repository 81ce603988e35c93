//! In-Memory Session Result Store Adapter
//!
//! Models browser session storage: each quiz session gets its own key/value
//! map and the advice lives JSON-encoded under [`ADVICE_STORAGE_KEY`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::advice::AdviceResult;
use crate::domain::foundation::QuizSessionId;
use crate::ports::{SessionResultStore, StoreError, ADVICE_STORAGE_KEY};

type SessionStorage = HashMap<String, String>;

/// In-memory, per-session advice storage.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionResultStore {
    sessions: Arc<RwLock<HashMap<QuizSessionId, SessionStorage>>>,
}

impl InMemorySessionResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a raw value under `key` for a session, bypassing encoding.
    pub async fn insert_raw(&self, session: QuizSessionId, key: &str, value: impl Into<String>) {
        self.sessions
            .write()
            .await
            .entry(session)
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Number of sessions holding any entry.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionResultStore for InMemorySessionResultStore {
    async fn put(&self, session: QuizSessionId, result: &AdviceResult) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string(result).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.insert_raw(session, ADVICE_STORAGE_KEY, encoded).await;
        Ok(())
    }

    async fn get(&self, session: QuizSessionId) -> Option<AdviceResult> {
        let sessions = self.sessions.read().await;
        let raw = sessions.get(&session)?.get(ADVICE_STORAGE_KEY)?;
        match serde_json::from_str(raw) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(quiz_id = %session, error = %e, "discarding unreadable stored advice");
                None
            }
        }
    }

    async fn clear(&self, session: QuizSessionId) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        if let Some(storage) = sessions.get_mut(&session) {
            storage.remove(ADVICE_STORAGE_KEY);
            if storage.is_empty() {
                sessions.remove(&session);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advice::normalize_list;

    fn sample_result() -> AdviceResult {
        normalize_list(vec!["Pay down the card".to_string(), "Invest".to_string()])
    }

    #[tokio::test]
    async fn put_then_get_returns_the_result() {
        let store = InMemorySessionResultStore::new();
        let session = QuizSessionId::new();

        store.put(session, &sample_result()).await.unwrap();

        assert_eq!(store.get(session).await, Some(sample_result()));
    }

    #[tokio::test]
    async fn get_without_put_is_absent() {
        let store = InMemorySessionResultStore::new();
        assert_eq!(store.get(QuizSessionId::new()).await, None);
    }

    #[tokio::test]
    async fn read_after_clear_is_absent() {
        let store = InMemorySessionResultStore::new();
        let session = QuizSessionId::new();
        store.put(session, &sample_result()).await.unwrap();

        store.clear(session).await.unwrap();

        assert_eq!(store.get(session).await, None);
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn clear_on_empty_session_is_fine() {
        let store = InMemorySessionResultStore::new();
        assert!(store.clear(QuizSessionId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn sessions_do_not_share_results() {
        let store = InMemorySessionResultStore::new();
        let first = QuizSessionId::new();
        let second = QuizSessionId::new();
        store.put(first, &sample_result()).await.unwrap();

        assert!(store.get(second).await.is_none());
    }

    #[tokio::test]
    async fn corrupted_entry_reads_as_absent() {
        let store = InMemorySessionResultStore::new();
        let session = QuizSessionId::new();

        store.insert_raw(session, ADVICE_STORAGE_KEY, "{not json").await;
        assert_eq!(store.get(session).await, None);

        store
            .insert_raw(session, ADVICE_STORAGE_KEY, r#"{"advice":["one"],"origin":"fallback"}"#)
            .await;
        assert_eq!(store.get(session).await, None);
    }

    #[tokio::test]
    async fn other_keys_survive_clear() {
        let store = InMemorySessionResultStore::new();
        let session = QuizSessionId::new();
        store.insert_raw(session, "theme", "dark").await;
        store.put(session, &sample_result()).await.unwrap();

        store.clear(session).await.unwrap();

        assert_eq!(store.session_count().await, 1);
        assert!(store.get(session).await.is_none());
    }
}
