/// Downloadable sample file showing the expected column layout
use csv::WriterBuilder;

use crate::modules::employee_import::domain::value_objects::EmployeeColumn;
use crate::shared::errors::{AppError, AppResult};

pub const SAMPLE_FILE_NAME: &str = "employee_import_sample.csv";

// One meal type per row so the sample survives the simple comma split
const SAMPLE_ROWS: [[&str; 7]; 3] = [
    [
        "Rahul Sharma",
        "rahul.sharma@company.com",
        "9876543210",
        "Pune",
        "Engineering",
        "Lunch",
        "Active",
    ],
    [
        "Priya Nair",
        "priya.nair@company.com",
        "9123456780",
        "Bangalore",
        "Human Resources",
        "Breakfast",
        "Active",
    ],
    [
        "Amit Verma",
        "amit.verma@company.com",
        "9988776655",
        "Mumbai",
        "Finance",
        "Dinner",
        "Inactive",
    ],
];

pub struct SampleTemplate;

impl SampleTemplate {
    pub fn headers() -> Vec<&'static str> {
        EmployeeColumn::ALL.iter().map(|c| c.header()).collect()
    }

    /// Header plus example rows as comma-joined text
    pub fn render() -> AppResult<String> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        writer.write_record(Self::headers())?;
        for row in SAMPLE_ROWS.iter() {
            writer.write_record(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::InternalError(format!("Failed to flush sample CSV: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| AppError::InternalError(format!("Sample CSV is not UTF-8: {}", e)))
    }
}
