//! Scoring engine configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// How to launch the scoring engine and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Executable to run
    #[serde(default = "default_program")]
    pub program: String,

    /// Leading arguments (comma-separated); the answers JSON is appended
    #[serde(default = "default_args")]
    pub args: String,

    /// Working directory for the engine process
    pub working_dir: Option<PathBuf>,

    /// Time allowed for one engine call, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl EngineConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get the leading arguments as a vector
    pub fn args_list(&self) -> Vec<String> {
        self.args
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.program.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ENGINE__PROGRAM"));
        }
        if self.timeout_ms == 0 || self.timeout_ms > 60_000 {
            return Err(ValidationError::InvalidEngineTimeout);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            working_dir: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_program() -> String {
    "python3".to_string()
}

fn default_args() -> String {
    "-u,ml/financial_model.py".to_string()
}

fn default_timeout_ms() -> u64 {
    4000
}
