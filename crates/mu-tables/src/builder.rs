//! Incremental table builder.

use mu_core::ParsedUnit;
use tracing::debug;

use crate::definition::TableDefinition;
use crate::error::{ConfigResult, TableKind};
use crate::tables::{PrefixEntry, SymbolEntry, Tables, longest_first};
use crate::validate;

/// Builder for constructing lookup tables.
///
/// Use `add_prefix` and `add_symbol` to collect entries, then call `build()`
/// to validate and freeze them into immutable `Tables`.
#[derive(Debug, Default)]
pub struct TableBuilder {
    prefixes: Vec<PrefixEntry>,
    symbols: Vec<SymbolEntry>,
}

impl TableBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the built-in SI catalog.
    pub fn standard() -> Self {
        let mut builder = Self::new();
        builder.add_definition(&TableDefinition::standard());
        builder
    }

    pub fn add_prefix(&mut self, key: impl Into<String>, scale: i32) -> &mut Self {
        self.prefixes.push(PrefixEntry {
            key: key.into(),
            scale,
            name: None,
        });
        self
    }

    pub fn add_symbol(&mut self, key: impl Into<String>, unit: ParsedUnit) -> &mut Self {
        self.symbols.push(SymbolEntry {
            key: key.into(),
            unit,
            name: None,
        });
        self
    }

    /// Add every entry of a definition, keeping display names.
    pub fn add_definition(&mut self, definition: &TableDefinition) -> &mut Self {
        self.prefixes
            .extend(definition.prefixes.iter().map(|p| PrefixEntry {
                key: p.key.clone(),
                scale: p.scale,
                name: p.name.clone(),
            }));
        self.symbols
            .extend(definition.symbols.iter().map(|s| SymbolEntry {
                key: s.key.clone(),
                unit: s.to_unit(),
                name: s.name.clone(),
            }));
        self
    }

    /// Validate keys and freeze the tables in longest-match-first order.
    pub fn build(self) -> ConfigResult<Tables> {
        let Self {
            mut prefixes,
            mut symbols,
        } = self;

        validate::validate_keys(TableKind::Prefix, prefixes.iter().map(|p| p.key.as_str()))?;
        validate::validate_keys(TableKind::Symbol, symbols.iter().map(|s| s.key.as_str()))?;

        prefixes.sort_by(|a, b| longest_first(&a.key, &b.key));
        symbols.sort_by(|a, b| longest_first(&a.key, &b.key));

        debug!(
            prefixes = prefixes.len(),
            symbols = symbols.len(),
            "built unit tables"
        );

        Ok(Tables::from_sorted(prefixes, symbols))
    }
}
