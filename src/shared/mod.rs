// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod config; // Import pipeline configuration
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)
pub mod validation; // Chain of responsibility for record validation

// Re-exports for convenience
pub use config::{CsvMode, ImportConfig, ImportConfigBuilder};
pub use errors::{AppError, AppResult};
