//! Key validation run before tables are frozen.

use std::collections::HashSet;

use crate::error::{ConfigError, ConfigResult, TableKind};

/// Reject empty and duplicate keys.
pub(crate) fn validate_keys<'a>(
    table: TableKind,
    keys: impl IntoIterator<Item = &'a str>,
) -> ConfigResult<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.is_empty() {
            return Err(ConfigError::EmptyKey { table });
        }
        if !seen.insert(key) {
            return Err(ConfigError::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
