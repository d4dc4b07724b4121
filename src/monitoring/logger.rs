use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::Result;
use crate::evaluator::EvaluationResult;
use crate::strategy::StrategyInput;

const HISTORY_FILE: &str = "evaluations.jsonl";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub timestamp: DateTime<Utc>,
    pub input: StrategyInput,
    pub result: EvaluationResult,
}

impl EvaluationRecord {
    pub fn new(input: StrategyInput, result: EvaluationResult) -> Self {
        Self {
            timestamp: Utc::now(),
            input,
            result,
        }
    }
}

/// Appends evaluations to a JSON-lines history file.
pub struct EvaluationLogger {
    log_path: PathBuf,
}

impl EvaluationLogger {
    pub fn new(log_dir: impl AsRef<Path>) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        std::fs::create_dir_all(log_dir)?;

        Ok(Self {
            log_path: log_dir.join(HISTORY_FILE),
        })
    }

    /// Points at an existing history without touching the filesystem, for
    /// read-only use.
    pub fn open(log_dir: impl AsRef<Path>) -> Self {
        Self {
            log_path: log_dir.as_ref().join(HISTORY_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub async fn log_evaluation(&self, record: &EvaluationRecord) -> Result<()> {
        debug!("Recording {} evaluation to {}", record.result.strategy, self.log_path.display());

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .await?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// All recorded evaluations, oldest first.
    pub async fn history(&self) -> Result<Vec<EvaluationRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&self.log_path).await?;

        let records = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect::<std::result::Result<Vec<EvaluationRecord>, _>>()?;

        info!("Loaded {} recorded evaluations", records.len());
        Ok(records)
    }
}
