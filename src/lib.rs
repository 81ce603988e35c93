//! Finance Advisor - Personal Finance Quiz Backend
//!
//! Walks a user through seven numeric questions, sends the validated answers
//! to an external scoring engine under a hard timeout and always returns
//! exactly five recommendations, falling back to deterministic advice when
//! the engine is slow or misbehaves.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
