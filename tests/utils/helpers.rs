/// Test helper functions and service builders
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tekmeals_admin_lib::modules::employee_import::{
    ImportBackend, ImportResult, ImportService, ImportState, ParsedRow, ProgressTracker,
    RosterRefresher,
};
use tekmeals_admin_lib::shared::{AppResult, ImportConfig, ImportConfigBuilder};

/// Config with a short simulated latency so tests stay fast
pub fn fast_config() -> ImportConfig {
    ImportConfigBuilder::new()
        .commit_delay(Duration::from_millis(20))
        .progress_steps(5)
        .commit_timeout(Duration::from_secs(5))
        .build()
        .expect("test config should be valid")
}

/// Backend that never answers within a test's lifetime
pub struct StalledBackend;

#[async_trait]
impl ImportBackend for StalledBackend {
    async fn bulk_import(
        &self,
        _rows: Vec<ParsedRow>,
        _progress: ProgressTracker,
    ) -> AppResult<ImportResult> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        unreachable!("stalled backend should be cancelled or timed out")
    }
}

#[derive(Default)]
pub struct RecordingRoster {
    pub refreshes: AtomicUsize,
    pub last_imported: AtomicUsize,
}

impl RosterRefresher for RecordingRoster {
    fn refresh_roster(&self, imported: usize) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        self.last_imported.store(imported, Ordering::SeqCst);
    }
}

impl RecordingRoster {
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

pub fn simulated_service_with_roster() -> (ImportService, Arc<RecordingRoster>) {
    let roster = Arc::new(RecordingRoster::default());
    let service = ImportService::simulated(fast_config()).with_roster_refresher(roster.clone());
    (service, roster)
}

/// Poll until the service reaches `state` or give up after about a second
pub async fn wait_for_state(service: &ImportService, state: ImportState) -> bool {
    for _ in 0..100 {
        if service.state().await == state {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// Writes `bytes` to a unique file in the temp dir
pub fn temp_file(extension: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tekmeals-import-{}.{}",
        uuid::Uuid::new_v4(),
        extension
    ));
    std::fs::write(&path, bytes).expect("temp file should be writable");
    path
}
