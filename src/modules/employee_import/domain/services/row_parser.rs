use crate::log_debug;
use crate::modules::employee_import::domain::entities::ParsedRow;
use crate::shared::config::CsvMode;
use crate::shared::errors::AppResult;
use crate::shared::validation::ValidationChain;

use super::row_reader::RowReader;
use super::row_rules::employee_row_chain;

/// Turns import file text into validated rows
#[derive(Clone)]
pub struct EmployeeRowParser {
    reader: RowReader,
    rules: ValidationChain<ParsedRow>,
}

impl EmployeeRowParser {
    pub fn new(mode: CsvMode) -> Self {
        Self {
            reader: RowReader::new(mode),
            rules: employee_row_chain(),
        }
    }

    /// Parse and validate every data line, keeping invalid rows in place.
    ///
    /// Returns `Ok(None)` when the file has a header but no data rows.
    pub fn parse(&self, content: &str) -> AppResult<Option<Vec<ParsedRow>>> {
        let Some(records) = self.reader.read_records(content)? else {
            log_debug!("No data rows after header ({} mode)", self.reader.mode());
            return Ok(None);
        };

        let rows = records
            .iter()
            .map(|fields| {
                let row = ParsedRow::from_fields(fields);
                let result = self.rules.validate(&row);
                row.with_validation(&result)
            })
            .collect();

        Ok(Some(rows))
    }
}

impl Default for EmployeeRowParser {
    fn default() -> Self {
        Self::new(CsvMode::default())
    }
}
