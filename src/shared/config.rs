/// Configuration for the employee import pipeline
///
/// Externalizes the simulated backend timings, the CSV dialect and the
/// accepted file extensions so hosts and tests can tune them.
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENV_DELAY_MS: &str = "TEKMEALS_IMPORT_DELAY_MS";
pub const ENV_PROGRESS_STEPS: &str = "TEKMEALS_IMPORT_PROGRESS_STEPS";
pub const ENV_TIMEOUT_MS: &str = "TEKMEALS_IMPORT_TIMEOUT_MS";
pub const ENV_CSV_MODE: &str = "TEKMEALS_CSV_MODE";

/// How data lines are split into fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvMode {
    /// Split on every comma and strip one pair of wrapping quotes per field.
    /// Quoted fields containing commas are split apart.
    #[default]
    Simple,
    /// RFC 4180 tokenizer; quoted commas stay inside the field
    Strict,
}

impl std::fmt::Display for CsvMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvMode::Simple => write!(f, "simple"),
            CsvMode::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for CsvMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(CsvMode::Simple),
            "strict" => Ok(CsvMode::Strict),
            _ => Err(format!("Invalid CSV mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Simulated latency of the bulk-import call
    pub commit_delay: Duration,

    /// Number of progress ticks emitted across `commit_delay`
    pub progress_steps: u32,

    /// Upper bound for one backend call
    pub commit_timeout: Duration,

    pub csv_mode: CsvMode,

    /// Lowercase extensions without the dot
    pub accepted_extensions: Vec<String>,
}

impl ImportConfig {
    pub fn new() -> Self {
        Self {
            commit_delay: Duration::from_millis(1500),
            progress_steps: 10,
            commit_timeout: Duration::from_secs(30),
            csv_mode: CsvMode::Simple,
            accepted_extensions: vec!["csv".to_string()],
        }
    }

    /// Loads `.env` (if any) and applies `TEKMEALS_*` overrides on top of the defaults
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ImportConfigBuilder::new();

        if let Some(raw) = lookup(ENV_DELAY_MS) {
            builder = builder.commit_delay(Duration::from_millis(raw.trim().parse::<u64>()?));
        }
        if let Some(raw) = lookup(ENV_PROGRESS_STEPS) {
            builder = builder.progress_steps(raw.trim().parse::<u32>()?);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            builder = builder.commit_timeout(Duration::from_millis(raw.trim().parse::<u64>()?));
        }
        if let Some(raw) = lookup(ENV_CSV_MODE) {
            builder = builder.csv_mode(raw.parse().map_err(AppError::InvalidInput)?);
        }

        builder.build().map_err(AppError::InvalidInput)
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.accepted_extensions.iter().any(|e| *e == extension)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.progress_steps == 0 {
            return Err("progress_steps must be > 0".to_string());
        }

        if self.commit_timeout.is_zero() {
            return Err("commit_timeout must be > 0".to_string());
        }

        if self.accepted_extensions.is_empty() {
            return Err("accepted_extensions cannot be empty".to_string());
        }

        if self
            .accepted_extensions
            .iter()
            .any(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err("accepted_extensions must be bare extensions like \"csv\"".to_string());
        }

        Ok(())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for ImportConfig to make test setup easier
#[derive(Default)]
pub struct ImportConfigBuilder {
    config: ImportConfig,
}

impl ImportConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ImportConfig::new(),
        }
    }

    pub fn commit_delay(mut self, delay: Duration) -> Self {
        self.config.commit_delay = delay;
        self
    }

    pub fn progress_steps(mut self, steps: u32) -> Self {
        self.config.progress_steps = steps;
        self
    }

    pub fn commit_timeout(mut self, timeout: Duration) -> Self {
        self.config.commit_timeout = timeout;
        self
    }

    pub fn csv_mode(mut self, mode: CsvMode) -> Self {
        self.config.csv_mode = mode;
        self
    }

    pub fn accepted_extensions(mut self, extensions: Vec<String>) -> Self {
        self.config.accepted_extensions = extensions
            .into_iter()
            .map(|e| e.to_lowercase())
            .collect();
        self
    }

    pub fn build(self) -> Result<ImportConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
