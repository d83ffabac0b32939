use async_trait::async_trait;
use std::time::Duration;

use crate::log_info;
use crate::modules::employee_import::application::ports::ImportBackend;
use crate::modules::employee_import::application::progress_tracker::ProgressTracker;
use crate::modules::employee_import::domain::services::summarize;
use crate::modules::employee_import::domain::{ImportProgress, ImportResult, ParsedRow};
use crate::shared::config::ImportConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::TimedOperation;

/// Stand-in for the bulk-import endpoint.
///
/// Waits a fixed delay in equal ticks, reporting progress after each one,
/// then treats every valid row as imported.
#[derive(Debug, Clone)]
pub struct SimulatedImportBackend {
    delay: Duration,
    steps: u32,
}

impl SimulatedImportBackend {
    pub fn new(delay: Duration, steps: u32) -> Self {
        Self {
            delay,
            steps: steps.max(1),
        }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(config.commit_delay, config.progress_steps)
    }
}

#[async_trait]
impl ImportBackend for SimulatedImportBackend {
    async fn bulk_import(
        &self,
        rows: Vec<ParsedRow>,
        progress: ProgressTracker,
    ) -> AppResult<ImportResult> {
        let timer = TimedOperation::new("simulated_bulk_import");
        let tick = self.delay / self.steps;

        progress.emit(ImportProgress::new(0, "Starting import..."));

        for step in 1..=self.steps {
            tokio::time::sleep(tick).await;
            progress.emit(ImportProgress::new(
                percent_at(step, self.steps),
                format!("Importing {} employees", rows.len()),
            ));
        }

        let result = summarize(&rows);
        log_info!(
            "Simulated import finished: {} imported, {} failed",
            result.success,
            result.failed
        );
        timer.finish_with_info(&format!("{} rows", rows.len()));

        Ok(result)
    }
}

/// Share of `steps` completed after `step` ticks
fn percent_at(step: u32, steps: u32) -> u8 {
    (u64::from(step) * 100 / u64::from(steps.max(1))).min(100) as u8
}
