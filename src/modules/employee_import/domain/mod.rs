pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;

pub use entities::{ImportProgress, ImportResult, ParsedRow, RowError};
pub use events::ImportNotice;
pub use value_objects::{EmployeeColumn, FileKind, ImportState};
