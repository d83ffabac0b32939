pub mod modules;
pub mod shared;

pub use modules::employee_import::{ImportNotice, ImportService, ImportState};
pub use shared::{AppError, AppResult, ImportConfig};

/// Builds an import service backed by the simulated endpoint, configured
/// from `.env` and `TEKMEALS_*` variables.
pub fn simulated_import_service() -> AppResult<ImportService> {
    shared::utils::init_logger();

    let config = ImportConfig::from_env()?;
    log::info!(
        "Employee import ready ({} CSV, {}ms simulated latency)",
        config.csv_mode,
        config.commit_delay.as_millis()
    );

    Ok(ImportService::simulated(config))
}
