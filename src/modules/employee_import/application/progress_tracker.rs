use crate::log_error;
use crate::modules::employee_import::domain::ImportProgress;
use crate::shared::utils::logger::LogContext;

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Forwards commit progress to an optional subscriber.
///
/// Percentages never go backwards: a lower value than the last one emitted
/// is raised to the last one.
#[derive(Clone)]
pub struct ProgressTracker {
    sender: Option<UnboundedSender<ImportProgress>>,
    last_percent: Arc<AtomicU8>,
}

impl ProgressTracker {
    pub fn new(sender: Option<UnboundedSender<ImportProgress>>) -> Self {
        Self {
            sender,
            last_percent: Arc::new(AtomicU8::new(0)),
        }
    }

    /// Tracker that only records the last percentage
    pub fn detached() -> Self {
        Self::new(None)
    }

    pub fn last_percent(&self) -> u8 {
        self.last_percent.load(Ordering::SeqCst)
    }

    pub fn emit(&self, progress: ImportProgress) -> bool {
        let previous = self
            .last_percent
            .fetch_max(progress.percent, Ordering::SeqCst);
        let progress = ImportProgress {
            percent: previous.max(progress.percent),
            ..progress
        };

        LogContext::import_progress(progress.percent, &progress.message);

        if let Some(ref sender) = self.sender {
            match sender.send(progress) {
                Ok(_) => true,
                Err(e) => {
                    log_error!("Failed to emit import progress: {}", e);
                    false
                }
            }
        } else {
            false
        }
    }
}
