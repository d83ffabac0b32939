/// Splits import file text into positional field lists.
///
/// The first non-blank line is the header and is discarded. Blank and
/// whitespace-only lines are dropped before anything else happens.
use csv::{ReaderBuilder, Trim};

use crate::shared::config::CsvMode;
use crate::shared::errors::AppResult;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Clone, Copy, Default)]
pub struct RowReader {
    mode: CsvMode,
}

impl RowReader {
    pub fn new(mode: CsvMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CsvMode {
        self.mode
    }

    /// Returns `None` when the text has no data line after the header.
    pub fn read_records(&self, content: &str) -> AppResult<Option<Vec<Vec<String>>>> {
        let content = content.trim_start_matches(BYTE_ORDER_MARK);

        let records = match self.mode {
            CsvMode::Simple => Self::read_simple(content),
            CsvMode::Strict => Self::read_strict(content)?,
        };

        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(records))
    }

    /// Every comma is a separator, quoted or not
    fn read_simple(content: &str) -> Vec<Vec<String>> {
        non_blank_lines(content)
            .skip(1)
            .map(|line| {
                line.split(',')
                    .map(|field| strip_wrapping_quotes(field.trim()).to_string())
                    .collect()
            })
            .collect()
    }

    /// Blank lines are dropped before tokenizing so the header is always
    /// the first non-blank line, as in simple mode
    fn read_strict(content: &str) -> AppResult<Vec<Vec<String>>> {
        let text = non_blank_lines(content).collect::<Vec<_>>().join("\n");

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // short rows are padded later
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut records: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(records)
    }
}

fn non_blank_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| !line.trim().is_empty())
}

/// Removes one pair of wrapping double quotes, if both ends have one
fn strip_wrapping_quotes(field: &str) -> &str {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        &field[1..field.len() - 1]
    } else {
        field
    }
}
