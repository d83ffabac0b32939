use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use super::ports::{ImportBackend, RosterRefresher};
use super::progress_tracker::ProgressTracker;
use super::session::{ImportSession, SessionClosed, SessionSnapshot};
use crate::modules::employee_import::domain::services::{SampleTemplate, SAMPLE_FILE_NAME};
use crate::modules::employee_import::domain::{
    ImportNotice, ImportProgress, ImportResult, ImportState,
};
use crate::modules::employee_import::infrastructure::file_loader::{file_name_of, load_file};
use crate::modules::employee_import::infrastructure::SimulatedImportBackend;
use crate::shared::config::ImportConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_error, log_info, log_warn};

enum CommitOutcome {
    Finished(AppResult<ImportResult>),
    TimedOut,
    Cancelled,
}

/// Returns the session to `Preview` if a commit future is dropped before it
/// records an outcome.
struct UploadGuard {
    session: Arc<Mutex<ImportSession>>,
    in_flight: Arc<Mutex<Option<CancellationToken>>>,
    armed: bool,
}

impl UploadGuard {
    fn disarm(&mut self) {
        self.armed = false;
    }

    fn abandon(in_flight: &mut Option<CancellationToken>, session: &mut ImportSession) {
        in_flight.take();
        if session.state() == ImportState::Uploading {
            if let Err(e) = session.cancel_commit() {
                LogContext::error_with_context(&e, "Failed to reset abandoned commit");
            }
        }
    }
}

impl Drop for UploadGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        log_warn!("Commit dropped before completion, returning to preview");

        if let (Ok(mut session), Ok(mut in_flight)) =
            (self.session.try_lock(), self.in_flight.try_lock())
        {
            Self::abandon(&mut in_flight, &mut session);
            return;
        }

        // Locks are busy; finish the reset on the runtime
        let in_flight = self.in_flight.clone();
        let session = self.session.clone();
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let mut session = session.lock().await;
                    let mut in_flight = in_flight.lock().await;
                    Self::abandon(&mut in_flight, &mut session);
                });
            }
            Err(_) => log_error!("No runtime to reset an abandoned commit"),
        }
    }
}

/// Entry point the dashboard shell drives for the employee bulk import.
///
/// Owns one `ImportSession`. The session lock is never held across the
/// backend call, so the shell can read state and cancel while uploading.
#[derive(Clone)]
pub struct ImportService {
    session: Arc<Mutex<ImportSession>>,
    backend: Arc<dyn ImportBackend>,
    roster: Option<Arc<dyn RosterRefresher>>,
    in_flight: Arc<Mutex<Option<CancellationToken>>>,
    config: ImportConfig,
}

impl ImportService {
    pub fn new(config: ImportConfig, backend: Arc<dyn ImportBackend>) -> Self {
        Self {
            session: Arc::new(Mutex::new(ImportSession::new(config.clone()))),
            backend,
            roster: None,
            in_flight: Arc::new(Mutex::new(None)),
            config,
        }
    }

    /// Service backed by the simulated bulk-import endpoint
    pub fn simulated(config: ImportConfig) -> Self {
        let backend = Arc::new(SimulatedImportBackend::from_config(&config));
        Self::new(config, backend)
    }

    pub fn with_roster_refresher(mut self, roster: Arc<dyn RosterRefresher>) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    pub async fn state(&self) -> ImportState {
        self.session.lock().await.state()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    /// Stage file text the shell already read
    pub async fn select_file(&self, file_name: &str, content: &str) -> AppResult<ImportNotice> {
        self.session.lock().await.select_file(file_name, content)
    }

    /// Read a file from disk and stage it. The extension is checked before
    /// the file is opened; read failures come back as a rejection notice.
    pub async fn select_path(&self, path: &Path) -> AppResult<ImportNotice> {
        let file_name = file_name_of(path);

        {
            let session = self.session.lock().await;
            if !session.state().accepts_file() {
                return Err(AppError::InvalidState(format!(
                    "cannot select a file while {}",
                    session.state()
                )));
            }
            if let Some(reason) = session.rejection_reason(&file_name) {
                return Ok(ImportNotice::FileRejected { file_name, reason });
            }
        }

        match load_file(path).await {
            Ok(loaded) => self.select_file(&loaded.file_name, &loaded.content).await,
            Err(e) => {
                LogContext::error_with_context(&e, &format!("Failed to load {}", path.display()));
                Ok(ImportNotice::FileRejected {
                    file_name,
                    reason: e.to_string(),
                })
            }
        }
    }

    pub async fn back(&self) -> AppResult<()> {
        self.session.lock().await.back()
    }

    /// Commit the staged rows through the backend.
    ///
    /// Backend failures, timeouts and cancellation are reported as notices
    /// and leave the session in `Error` or `Preview`; `Err` is only returned
    /// when the session is not ready to commit.
    pub async fn commit(
        &self,
        progress: Option<UnboundedSender<ImportProgress>>,
    ) -> AppResult<Vec<ImportNotice>> {
        let token = CancellationToken::new();
        let rows = {
            let mut session = self.session.lock().await;
            let mut in_flight = self.in_flight.lock().await;
            let rows = session.begin_commit()?;
            *in_flight = Some(token.clone());
            rows
        };
        let mut guard = UploadGuard {
            session: self.session.clone(),
            in_flight: self.in_flight.clone(),
            armed: true,
        };

        let timer = TimedOperation::new("employee_bulk_import");
        log_info!("Committing {} staged rows", rows.len());

        let call = tokio::time::timeout(
            self.config.commit_timeout,
            self.backend.bulk_import(rows, ProgressTracker::new(progress)),
        );

        let outcome = tokio::select! {
            _ = token.cancelled() => CommitOutcome::Cancelled,
            finished = call => match finished {
                Ok(result) => CommitOutcome::Finished(result),
                Err(_) => CommitOutcome::TimedOut,
            },
        };

        *self.in_flight.lock().await = None;

        let mut session = self.session.lock().await;
        guard.disarm();
        let notices = match outcome {
            CommitOutcome::Finished(Ok(result)) => session.complete(result)?,
            CommitOutcome::Finished(Err(e)) => {
                LogContext::error_with_context(&e, "Bulk import failed");
                vec![session.fail(e.to_string())?]
            }
            CommitOutcome::TimedOut => {
                let e = AppError::Timeout(format!(
                    "no response from bulk import within {}ms",
                    self.config.commit_timeout.as_millis()
                ));
                log_warn!("{}", e);
                vec![session.fail(e.to_string())?]
            }
            CommitOutcome::Cancelled => {
                log_info!("Bulk import cancelled by operator");
                vec![session.cancel_commit()?]
            }
        };

        timer.finish_with_info(&format!("ended in {}", session.state()));
        Ok(notices)
    }

    /// Request cancellation of the in-flight commit. Returns false when
    /// nothing is uploading.
    pub async fn cancel_commit(&self) -> bool {
        match self.in_flight.lock().await.as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Close the dialog and notify the roster when employees were imported
    pub async fn close(&self) -> AppResult<SessionClosed> {
        let closed = self.session.lock().await.close()?;

        if closed.refresh_roster {
            if let Some(ref roster) = self.roster {
                log_info!("Refreshing roster after importing {} employees", closed.imported);
                roster.refresh_roster(closed.imported);
            }
        }

        Ok(closed)
    }

    /// Sample template file name and contents
    pub fn sample_template(&self) -> AppResult<(&'static str, String)> {
        Ok((SAMPLE_FILE_NAME, SampleTemplate::render()?))
    }
}
