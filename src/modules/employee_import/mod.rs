/// Employee bulk import
///
/// Reads an employee CSV, validates every row, lets the operator review the
/// result and commits the batch through an injectable backend.
///
/// Architecture:
/// - Domain: rows, results, notices and the pure parse/validate/summarize services
/// - Application: session state machine, import service and its ports
/// - Infrastructure: simulated bulk-import backend and file loading
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    ImportBackend, ImportService, ImportSession, ProgressTracker, RosterRefresher, SessionClosed,
    SessionSnapshot,
};
pub use domain::{
    services::{summarize, EmployeeRowParser, SampleTemplate, SAMPLE_FILE_NAME},
    EmployeeColumn, FileKind, ImportNotice, ImportProgress, ImportResult, ImportState, ParsedRow,
    RowError,
};
pub use infrastructure::{load_file, LoadedFile, SimulatedImportBackend};
