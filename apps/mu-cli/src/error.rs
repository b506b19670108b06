//! Error types for the command-line front end.

use std::path::PathBuf;

use mu_measure::MeasureError;
use mu_tables::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Unit tables: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Measure(#[from] MeasureError),

    #[error("Failed to read batch file: {path}")]
    BatchRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid batch file: {0}")]
    BatchFormat(#[from] serde_yaml::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
