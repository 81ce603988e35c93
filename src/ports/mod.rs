//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScoringEngine` - the external advice generator
//! - `SessionResultStore` - tab-scoped hand-off of the advice result
//! - `QuizRepository` - quiz state per session

mod quiz_repository;
mod scoring_engine;
mod session_result_store;

pub use quiz_repository::QuizRepository;
pub use scoring_engine::{EngineError, EngineReply, EngineRequest, ScoringEngine};
pub use session_result_store::{SessionResultStore, StoreError, ADVICE_STORAGE_KEY};
