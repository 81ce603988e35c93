//! AdviceClient - one engine call per request, raced against a timer.
//!
//! The engine task and the timer task each try to settle a shared one-shot
//! slot; whichever gets there first decides the outcome and the other result
//! is dropped. Both tasks are aborted once the outcome is known, which also
//! kills an engine process still running past the deadline.
//!
//! The client never fails: timeouts, launch errors, exit failures and
//! unreadable replies all produce the deterministic fallback list.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::advice::{fallback_advice, normalize, AdviceResult};
use crate::domain::quiz::ValidatedAnswerSet;
use crate::ports::{EngineError, EngineReply, EngineRequest, ScoringEngine};

/// Time allowed for one engine call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(4000);

type Outcome = Result<EngineReply, EngineError>;
type Slot = Arc<Mutex<Option<oneshot::Sender<Outcome>>>>;

/// Produces advice for a validated answer set.
#[derive(Clone)]
pub struct AdviceClient {
    engine: Arc<dyn ScoringEngine>,
    timeout: Duration,
}

impl AdviceClient {
    pub fn new(engine: Arc<dyn ScoringEngine>) -> Self {
        Self {
            engine,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Calls the engine once and normalizes whatever comes back.
    ///
    /// Always yields exactly five items. The origin tells engine-derived
    /// advice apart from the fallback.
    pub async fn request_advice(&self, answers: &ValidatedAnswerSet) -> AdviceResult {
        match self.race(EngineRequest::from(answers)).await {
            Ok(reply) => match reply.payload() {
                Ok(payload) => {
                    let result = normalize(Some(payload), answers);
                    if result.is_fallback() {
                        warn!(engine = %self.engine.name(), "engine reply is not a list of strings, using fallback advice");
                    } else {
                        debug!(engine = %self.engine.name(), "engine advice received");
                    }
                    result
                }
                Err(e) => {
                    warn!(
                        engine = %self.engine.name(),
                        code = %e.code(),
                        error = %e,
                        "unusable engine reply, using fallback advice"
                    );
                    fallback_advice(answers)
                }
            },
            Err(e) => {
                warn!(
                    engine = %self.engine.name(),
                    code = %e.code(),
                    error = %e,
                    "engine call failed, using fallback advice"
                );
                fallback_advice(answers)
            }
        }
    }

    async fn race(&self, request: EngineRequest) -> Outcome {
        let (tx, rx) = oneshot::channel();
        let slot: Slot = Arc::new(Mutex::new(Some(tx)));

        let engine_task: JoinHandle<()> = {
            let engine = Arc::clone(&self.engine);
            let slot = Arc::clone(&slot);
            tokio::spawn(async move {
                let outcome = engine.score(request).await;
                settle(&slot, outcome);
            })
        };

        let timer_task: JoinHandle<()> = {
            let timeout = self.timeout;
            let slot = Arc::clone(&slot);
            tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                settle(&slot, Err(timeout_error(timeout)));
            })
        };

        let outcome = rx
            .await
            .unwrap_or_else(|e| Err(EngineError::Aborted(e.to_string())));

        engine_task.abort();
        timer_task.abort();
        outcome
    }
}

fn timeout_error(timeout: Duration) -> EngineError {
    EngineError::Timeout {
        timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
    }
}

/// First writer wins; later outcomes are discarded.
fn settle(slot: &Slot, outcome: Outcome) {
    let sender = match slot.lock() {
        Ok(mut guard) => guard.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    if let Some(sender) = sender {
        let _ = sender.send(outcome);
    }
}
