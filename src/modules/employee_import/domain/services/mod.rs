pub mod commit_summary;
pub mod row_parser;
pub mod row_reader;
pub mod row_rules;
pub mod sample_template;

// Re-export main types for public API
pub use commit_summary::summarize;
pub use row_parser::EmployeeRowParser;
pub use row_reader::RowReader;
pub use row_rules::employee_row_chain;
pub use sample_template::{SampleTemplate, SAMPLE_FILE_NAME};
