/// Value objects for the employee import domain
use serde::{Deserialize, Serialize};
use std::path::Path;

/// State of one import session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportState {
    Idle,
    Preview,
    Uploading,
    Complete,
    Error,
}

impl ImportState {
    /// Whether the session accepts a new file in this state
    pub fn accepts_file(&self) -> bool {
        matches!(self, ImportState::Idle | ImportState::Preview)
    }
}

impl std::fmt::Display for ImportState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportState::Idle => write!(f, "idle"),
            ImportState::Preview => write!(f, "preview"),
            ImportState::Uploading => write!(f, "uploading"),
            ImportState::Complete => write!(f, "complete"),
            ImportState::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for ImportState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(ImportState::Idle),
            "preview" => Ok(ImportState::Preview),
            "uploading" => Ok(ImportState::Uploading),
            "complete" => Ok(ImportState::Complete),
            "error" => Ok(ImportState::Error),
            _ => Err(format!("Invalid import state: {}", s)),
        }
    }
}

/// Kind of file picked by the operator, judged by extension only
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    /// Excel workbooks are recognised so they can be refused with a clear reason
    Spreadsheet,
    Other(String),
    Missing,
}

impl FileKind {
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => FileKind::Csv,
            Some("xlsx") | Some("xls") => FileKind::Spreadsheet,
            Some(other) => FileKind::Other(other.to_string()),
            None => FileKind::Missing,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        match self {
            FileKind::Csv => Some("csv"),
            FileKind::Spreadsheet => Some("xlsx"),
            FileKind::Other(ext) => Some(ext.as_str()),
            FileKind::Missing => None,
        }
    }
}

/// Positional columns of the employee import file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeColumn {
    Name,
    Email,
    Phone,
    City,
    Department,
    MealTypes,
    Status,
}

impl EmployeeColumn {
    /// Fixed column order of the import file
    pub const ALL: [EmployeeColumn; 7] = [
        EmployeeColumn::Name,
        EmployeeColumn::Email,
        EmployeeColumn::Phone,
        EmployeeColumn::City,
        EmployeeColumn::Department,
        EmployeeColumn::MealTypes,
        EmployeeColumn::Status,
    ];

    /// Header text used in the sample template
    pub fn header(&self) -> &'static str {
        match self {
            EmployeeColumn::Name => "Employee Name",
            EmployeeColumn::Email => "Email",
            EmployeeColumn::Phone => "Phone No",
            EmployeeColumn::City => "City",
            EmployeeColumn::Department => "Department",
            EmployeeColumn::MealTypes => "Meal Types",
            EmployeeColumn::Status => "Status",
        }
    }

    pub fn position(&self) -> usize {
        *self as usize
    }
}
