/// Import session state machine
///
/// idle -> preview -> uploading -> complete | error. `close` resets to idle
/// from every state except uploading. The session owns the staged rows.
use serde::Serialize;
use uuid::Uuid;

use crate::log_info;
use crate::modules::employee_import::domain::services::EmployeeRowParser;
use crate::modules::employee_import::domain::{
    FileKind, ImportNotice, ImportResult, ImportState, ParsedRow,
};
use crate::shared::config::ImportConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

/// Outcome of closing the import dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionClosed {
    /// Whether the roster collaborator should reload its list
    pub refresh_roster: bool,
    pub imported: usize,
}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub state: ImportState,
    pub file_name: Option<String>,
    pub rows: Vec<ParsedRow>,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub result: Option<ImportResult>,
    pub failure: Option<String>,
}

pub struct ImportSession {
    id: Uuid,
    state: ImportState,
    file_name: Option<String>,
    rows: Vec<ParsedRow>,
    result: Option<ImportResult>,
    failure: Option<String>,
    parser: EmployeeRowParser,
    config: ImportConfig,
}

impl ImportSession {
    pub fn new(config: ImportConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: ImportState::Idle,
            file_name: None,
            rows: Vec::new(),
            result: None,
            failure: None,
            parser: EmployeeRowParser::new(config.csv_mode),
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> ImportState {
        self.state
    }

    pub fn rows(&self) -> &[ParsedRow] {
        &self.rows
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn result(&self) -> Option<&ImportResult> {
        self.result.as_ref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|r| r.valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.rows.len() - self.valid_count()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            state: self.state,
            file_name: self.file_name.clone(),
            rows: self.rows.clone(),
            valid_count: self.valid_count(),
            invalid_count: self.invalid_count(),
            result: self.result.clone(),
            failure: self.failure.clone(),
        }
    }

    /// Reason to refuse a file before reading it, if any
    pub fn rejection_reason(&self, file_name: &str) -> Option<String> {
        match FileKind::from_file_name(file_name) {
            FileKind::Spreadsheet => Some(
                "Excel workbooks are not supported, save the sheet as CSV first".to_string(),
            ),
            FileKind::Missing => Some("File has no extension".to_string()),
            kind => {
                let extension = kind.extension().unwrap_or_default();
                if self.config.accepts_extension(extension) {
                    None
                } else {
                    Some(format!(
                        "Unsupported file type '.{}', expected {}",
                        extension,
                        self.accepted_list()
                    ))
                }
            }
        }
    }

    /// Stage a picked file. Rejections leave the session as it was.
    pub fn select_file(&mut self, file_name: &str, content: &str) -> AppResult<ImportNotice> {
        if !self.state.accepts_file() {
            return Err(AppError::InvalidState(format!(
                "cannot select a file while {}",
                self.state
            )));
        }

        if let Some(reason) = self.rejection_reason(file_name) {
            log_info!("Rejected import file '{}': {}", file_name, reason);
            return Ok(ImportNotice::FileRejected {
                file_name: file_name.to_string(),
                reason,
            });
        }

        let rows = match self.parser.parse(content) {
            Ok(Some(rows)) => rows,
            Ok(None) => {
                return Ok(ImportNotice::NoDataRows {
                    file_name: file_name.to_string(),
                })
            }
            Err(e) => {
                LogContext::error_with_context(&e, &format!("Failed to read '{}'", file_name));
                return Ok(ImportNotice::FileRejected {
                    file_name: file_name.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        self.rows = rows;
        self.file_name = Some(file_name.to_string());
        self.transition(ImportState::Preview);

        let notice = ImportNotice::RowsParsed {
            total: self.rows.len(),
            valid: self.valid_count(),
            invalid: self.invalid_count(),
        };
        LogContext::parse_summary(file_name, self.rows.len(), self.invalid_count());

        Ok(notice)
    }

    /// "Change" / "Back": drop the staged rows
    pub fn back(&mut self) -> AppResult<()> {
        match self.state {
            ImportState::Idle => Ok(()),
            ImportState::Preview => {
                self.clear_staging();
                self.transition(ImportState::Idle);
                Ok(())
            }
            state => Err(AppError::InvalidState(format!("cannot go back while {}", state))),
        }
    }

    /// Enter `Uploading` and hand out a copy of the staged rows
    pub fn begin_commit(&mut self) -> AppResult<Vec<ParsedRow>> {
        if self.state != ImportState::Preview {
            return Err(AppError::InvalidState(format!(
                "cannot import while {}",
                self.state
            )));
        }
        if self.valid_count() == 0 {
            return Err(AppError::ValidationError(
                "No valid rows to import".to_string(),
            ));
        }

        self.transition(ImportState::Uploading);
        Ok(self.rows.clone())
    }

    pub fn complete(&mut self, result: ImportResult) -> AppResult<Vec<ImportNotice>> {
        self.ensure_uploading("complete")?;

        let mut notices = vec![ImportNotice::ImportCompleted {
            success: result.success,
            failed: result.failed,
        }];
        if result.has_imports() {
            notices.push(ImportNotice::SuperAdminNotified {
                imported: result.success,
            });
        }

        self.result = Some(result);
        self.transition(ImportState::Complete);
        Ok(notices)
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> AppResult<ImportNotice> {
        self.ensure_uploading("fail")?;

        let reason = reason.into();
        self.failure = Some(reason.clone());
        self.transition(ImportState::Error);
        Ok(ImportNotice::ImportFailed { reason })
    }

    /// Abort an in-flight commit; the staged rows stay for another try
    pub fn cancel_commit(&mut self) -> AppResult<ImportNotice> {
        self.ensure_uploading("cancel")?;

        self.transition(ImportState::Preview);
        Ok(ImportNotice::ImportCancelled)
    }

    /// Dialog closed: reset everything. Refresh is requested only after a
    /// completed import that imported something. Refused mid-upload.
    pub fn close(&mut self) -> AppResult<SessionClosed> {
        if self.state == ImportState::Uploading {
            return Err(AppError::InvalidState(
                "cannot close while uploading".to_string(),
            ));
        }

        let imported = match (&self.state, &self.result) {
            (ImportState::Complete, Some(result)) => result.success,
            _ => 0,
        };

        self.clear_staging();
        self.result = None;
        self.failure = None;
        self.transition(ImportState::Idle);

        Ok(SessionClosed {
            refresh_roster: imported > 0,
            imported,
        })
    }

    fn ensure_uploading(&self, action: &str) -> AppResult<()> {
        if self.state != ImportState::Uploading {
            return Err(AppError::InvalidState(format!(
                "cannot {} while {}",
                action, self.state
            )));
        }
        Ok(())
    }

    fn clear_staging(&mut self) {
        self.rows.clear();
        self.file_name = None;
    }

    fn transition(&mut self, to: ImportState) {
        LogContext::state_transition(&self.state.to_string(), &to.to_string());
        self.state = to;
    }

    fn accepted_list(&self) -> String {
        self.config
            .accepted_extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::new(ImportConfig::default())
    }
}
