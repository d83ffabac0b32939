/// Operator-facing notices produced by the import pipeline
///
/// The hosting dashboard decides how to present them (toast, banner, log).
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportNotice {
    FileRejected { file_name: String, reason: String },
    NoDataRows { file_name: String },
    RowsParsed { total: usize, valid: usize, invalid: usize },
    ImportCompleted { success: usize, failed: usize },
    /// UI-level notice only; nothing is actually delivered to the Super Admin
    SuperAdminNotified { imported: usize },
    ImportFailed { reason: String },
    ImportCancelled,
}

impl ImportNotice {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ImportNotice::FileRejected { .. }
                | ImportNotice::NoDataRows { .. }
                | ImportNotice::ImportFailed { .. }
        )
    }
}

impl std::fmt::Display for ImportNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportNotice::FileRejected { file_name, reason } => {
                write!(f, "Cannot import '{}': {}", file_name, reason)
            }
            ImportNotice::NoDataRows { file_name } => {
                write!(f, "'{}' does not contain any data rows", file_name)
            }
            ImportNotice::RowsParsed {
                total,
                valid,
                invalid,
            } => write!(
                f,
                "Found {} rows: {} valid, {} with errors",
                total, valid, invalid
            ),
            ImportNotice::ImportCompleted { success, failed } => {
                write!(f, "Imported {} employees, {} failed", success, failed)
            }
            ImportNotice::SuperAdminNotified { imported } => write!(
                f,
                "Super Admin has been notified about {} new employees",
                imported
            ),
            ImportNotice::ImportFailed { reason } => write!(f, "Import failed: {}", reason),
            ImportNotice::ImportCancelled => write!(f, "Import cancelled"),
        }
    }
}
