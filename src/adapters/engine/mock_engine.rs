//! Mock Scoring Engine for testing.
//!
//! Stands in for the external engine so the advice flow can be exercised
//! without spawning a process.
//!
//! # Features
//!
//! - Pre-configured replies, consumed in order
//! - Simulated latency for timeout testing
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let engine = MockScoringEngine::new()
//!     .with_advice(&["Pay off the card", "Open a Roth IRA"])
//!     .with_delay(Duration::from_millis(100));
//!
//! let reply = engine.score(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{EngineError, EngineReply, EngineRequest, ScoringEngine};

/// Advice returned once the reply queue is empty.
pub const DEFAULT_MOCK_ADVICE: [&str; 5] = [
    "Keep three months of expenses in cash",
    "Pay down high-interest debt first",
    "Automate a monthly transfer into savings",
    "Review your insurance coverage",
    "Rebalance investments once a year",
];

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Raw output lines, as the engine would print them.
    Lines(Vec<String>),
    /// A failed invocation.
    Error(EngineError),
}

/// Mock scoring engine.
#[derive(Debug, Clone, Default)]
pub struct MockScoringEngine {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<EngineRequest>>>,
}

impl MockScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply whose last line is `advice` encoded as a JSON list.
    pub fn with_advice(self, advice: &[&str]) -> Self {
        let line = serde_json::Value::from(advice.to_vec()).to_string();
        self.with_lines(&[line.as_str()])
    }

    /// Queues raw output lines.
    pub fn with_lines(self, lines: &[&str]) -> Self {
        lock(&self.replies).push_back(MockReply::Lines(
            lines.iter().map(|line| line.to_string()).collect(),
        ));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: EngineError) -> Self {
        lock(&self.replies).push_back(MockReply::Error(error));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded requests.
    pub fn calls(&self) -> Vec<EngineRequest> {
        lock(&self.calls).clone()
    }

    fn next_reply(&self) -> MockReply {
        lock(&self.replies).pop_front().unwrap_or_else(|| {
            let line = serde_json::Value::from(DEFAULT_MOCK_ADVICE.to_vec()).to_string();
            MockReply::Lines(vec![line])
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ScoringEngine for MockScoringEngine {
    async fn score(&self, request: EngineRequest) -> Result<EngineReply, EngineError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Lines(lines) => Ok(EngineReply::new(lines)),
            MockReply::Error(error) => Err(error),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
