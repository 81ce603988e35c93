//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `quiz` - Question catalogue, answer validation and the quiz state machine
//! - `advice` - Five-item advice contract, normalization and fallback content

pub mod advice;
pub mod foundation;
pub mod quiz;
