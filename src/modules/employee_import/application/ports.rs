use async_trait::async_trait;

use super::progress_tracker::ProgressTracker;
use crate::modules::employee_import::domain::{ImportResult, ParsedRow};
use crate::shared::errors::AppResult;

/// Bulk-import endpoint that finalizes a staged batch.
///
/// Receives the full parsed set, valid and invalid rows together.
#[async_trait]
pub trait ImportBackend: Send + Sync {
    async fn bulk_import(
        &self,
        rows: Vec<ParsedRow>,
        progress: ProgressTracker,
    ) -> AppResult<ImportResult>;
}

/// Employee roster view that must reload after employees were imported
pub trait RosterRefresher: Send + Sync {
    fn refresh_roster(&self, imported: usize);
}
