//! GetResultsHandler - reads the advice stored for a session.

use std::sync::Arc;

use crate::domain::advice::AdviceResult;
use crate::domain::foundation::QuizSessionId;
use crate::ports::SessionResultStore;

/// Query for a session's advice.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub quiz_id: QuizSessionId,
}

pub struct GetResultsHandler {
    store: Arc<dyn SessionResultStore>,
}

impl GetResultsHandler {
    pub fn new(store: Arc<dyn SessionResultStore>) -> Self {
        Self { store }
    }

    /// `None` means there is nothing to show and the user should start over.
    pub async fn handle(&self, query: GetResultsQuery) -> Option<AdviceResult> {
        self.store.get(query.quiz_id).await
    }
}
