//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `engine` - Scoring engine (external process, mock)
//! - `storage` - In-memory quiz repository and session result store
//! - `http` - REST API

pub mod engine;
pub mod http;
pub mod storage;

pub use engine::{MockScoringEngine, ProcessScoringEngine};
pub use storage::{InMemoryQuizRepository, InMemorySessionResultStore};
