pub mod file_loader;
pub mod simulated_backend;

pub use file_loader::{load_file, LoadedFile};
pub use simulated_backend::SimulatedImportBackend;
