//! Process-backed scoring engine.
//!
//! Launches the configured program once per request with the answers JSON as
//! its final argument and reads everything it prints to stdout. The child is
//! spawned with `kill_on_drop`, so a caller that stops waiting (the advice
//! timeout) also terminates the process.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::config::EngineConfig;
use crate::ports::{EngineError, EngineReply, EngineRequest, ScoringEngine};

/// Scoring engine that runs an external program.
#[derive(Debug, Clone)]
pub struct ProcessScoringEngine {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ProcessScoringEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let engine = Self::new(config.program.clone()).with_args(config.args_list());
        match &config.working_dir {
            Some(dir) => engine.with_working_dir(dir.clone()),
            None => engine,
        }
    }

    /// Arguments placed before the answers JSON.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl ScoringEngine for ProcessScoringEngine {
    async fn score(&self, request: EngineRequest) -> Result<EngineReply, EngineError> {
        let argument = request.to_argument()?;

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(&argument)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .await
            .map_err(|e| EngineError::Spawn(format!("{}: {}", self.program, e)))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!(engine = %self.program, stderr = %stderr.trim(), "scoring engine stderr");
        }

        if !output.status.success() {
            return Err(EngineError::NonZeroExit {
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(EngineReply::from_output(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }

    fn name(&self) -> &str {
        "process"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> EngineRequest {
        EngineRequest {
            age: 30.0,
            income: 5000.0,
            savings: 10000.0,
            debt: 2000.0,
            expenses: 3000.0,
            investment_risk: 5.0,
            dependents: 1.0,
            financial_goals: None,
        }
    }

    fn shell(script: &str) -> ProcessScoringEngine {
        // `sh -c script name arg`: the answers JSON arrives as $1
        ProcessScoringEngine::new("sh").with_args(["-c", script, "engine"])
    }

    #[test]
    fn from_config_copies_launch_settings() {
        let config = EngineConfig {
            program: "python3".to_string(),
            args: "-u,model.py".to_string(),
            working_dir: Some(PathBuf::from("/srv/advisor")),
            timeout_ms: 4000,
        };
        let engine = ProcessScoringEngine::from_config(&config);
        assert_eq!(engine.program(), "python3");
        assert_eq!(engine.args(), ["-u", "model.py"]);
        assert_eq!(engine.working_dir, Some(PathBuf::from("/srv/advisor")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn passes_answers_as_final_argument() {
        let engine = shell(r#"echo "$1""#);
        let reply = engine.score(request()).await.unwrap();
        let echoed: serde_json::Value =
            serde_json::from_str(reply.last_non_empty_line().unwrap()).unwrap();
        assert_eq!(echoed["income"], json!(5000.0));
        assert_eq!(echoed["investmentRisk"], json!(5.0));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn collects_every_stdout_line() {
        let engine = shell(r#"echo "Warning: using defaults"; echo '["A","B"]'"#);
        let reply = engine.score(request()).await.unwrap();
        assert_eq!(reply.lines().len(), 2);
        assert_eq!(reply.payload().unwrap(), json!(["A", "B"]));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let engine = shell("echo boom >&2; exit 3");
        let err = engine.score(request()).await.unwrap_err();
        assert_eq!(
            err,
            EngineError::NonZeroExit {
                code: Some(3),
                stderr: "boom".to_string()
            }
        );
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let engine = ProcessScoringEngine::new("definitely-not-an-advice-engine-7f3a");
        let err = engine.score(request()).await.unwrap_err();
        assert!(matches!(err, EngineError::Spawn(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn runs_in_the_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("advice.json"), "[\"From disk\"]\n").unwrap();

        let engine = shell("cat advice.json").with_working_dir(dir.path());
        let reply = engine.score(request()).await.unwrap();
        assert_eq!(reply.payload().unwrap(), json!(["From disk"]));
    }
}
