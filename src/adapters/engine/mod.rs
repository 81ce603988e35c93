//! Scoring engine adapters.
//!
//! - `ProcessScoringEngine` - runs the external engine program
//! - `MockScoringEngine` - scripted replies for tests

mod mock_engine;
mod process_engine;

pub use mock_engine::{MockReply, MockScoringEngine, DEFAULT_MOCK_ADVICE};
pub use process_engine::ProcessScoringEngine;
