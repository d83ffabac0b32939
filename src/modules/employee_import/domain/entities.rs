/// Domain entities for the employee bulk import
///
/// Everything here lives only for the duration of one import session;
/// nothing is persisted by this module.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::EmployeeColumn;
use crate::shared::validation::ValidationResult;

pub const DEFAULT_STATUS: &str = "Active";

/// Line number of the first data row: 1-based lines plus the header line
pub const FIRST_DATA_LINE: usize = 2;

/// One data line of the import file, validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub department: String,
    /// Raw meal type tags as they appeared in the file
    pub meal_types: String,
    pub status: String,
    pub valid: bool,
    pub error: Option<String>,
}

impl ParsedRow {
    /// Build a row from positional fields. Missing trailing columns become
    /// empty strings and extra columns are ignored.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        let field = |column: EmployeeColumn| {
            fields
                .get(column.position())
                .map(|f| f.as_ref().to_string())
                .unwrap_or_default()
        };

        let status = field(EmployeeColumn::Status);

        Self {
            name: field(EmployeeColumn::Name),
            email: field(EmployeeColumn::Email),
            phone: field(EmployeeColumn::Phone),
            city: field(EmployeeColumn::City),
            department: field(EmployeeColumn::Department),
            meal_types: field(EmployeeColumn::MealTypes),
            status: if status.is_empty() {
                DEFAULT_STATUS.to_string()
            } else {
                status
            },
            valid: true,
            error: None,
        }
    }

    /// Record the outcome of row validation; only the first error is kept
    pub fn with_validation(mut self, result: &ValidationResult) -> Self {
        self.valid = result.is_valid;
        self.error = if result.is_valid {
            None
        } else {
            result.first_error().map(str::to_string)
        };
        self
    }

    /// Individual meal type tags, split on `,`, `;` or `|`
    pub fn meal_type_tags(&self) -> Vec<&str> {
        self.meal_types
            .split([',', ';', '|'])
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

/// Line number in the original file of the row at `index` in the parsed set
pub fn line_number(index: usize) -> usize {
    index + FIRST_DATA_LINE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// Final tally of a committed import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: usize,
    pub failed: usize,
    pub errors: Vec<RowError>,
    pub completed_at: DateTime<Utc>,
}

impl ImportResult {
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    pub fn has_imports(&self) -> bool {
        self.success > 0
    }
}

/// Progress event emitted while a commit is in flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportProgress {
    pub percent: u8,
    pub message: String,
}

impl ImportProgress {
    pub fn new(percent: u8, message: impl Into<String>) -> Self {
        Self {
            percent: percent.min(100),
            message: message.into(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.percent >= 100
    }
}
