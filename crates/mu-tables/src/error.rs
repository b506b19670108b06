//! Table construction errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which lookup table an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Prefix,
    Symbol,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Prefix => write!(f, "prefix"),
            TableKind::Symbol => write!(f, "symbol"),
        }
    }
}

/// Errors raised while building or loading tables. Always fatal for the
/// tables being built.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("duplicate key {key:?} in {table} table")]
    DuplicateKey { table: TableKind, key: String },

    #[error("empty key in {table} table")]
    EmptyKey { table: TableKind },

    #[error("failed to read table definition: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid table definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
