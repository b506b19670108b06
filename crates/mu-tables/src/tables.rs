//! Immutable, longest-match-first lookup tables.

use std::cmp::Ordering;

use mu_core::ParsedUnit;

use crate::builder::TableBuilder;
use crate::definition::TableDefinition;
use crate::error::ConfigResult;

/// Metric prefix and the power of ten it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixEntry {
    pub key: String,
    pub scale: i32,
    pub name: Option<String>,
}

/// Unit symbol and the parsed unit it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub key: String,
    pub unit: ParsedUnit,
    pub name: Option<String>,
}

/// Frozen prefix and symbol tables.
///
/// Both tables are sorted longest key first, so the first entry whose key
/// starts the remaining text is always the longest match. Build with
/// [`crate::TableBuilder`]; there is no way to mutate a built table.
#[derive(Debug, Clone)]
pub struct Tables {
    prefixes: Vec<PrefixEntry>,
    symbols: Vec<SymbolEntry>,
}

impl Tables {
    pub(crate) fn from_sorted(prefixes: Vec<PrefixEntry>, symbols: Vec<SymbolEntry>) -> Self {
        Self { prefixes, symbols }
    }

    /// Tables holding only the entries of `definition`, without the SI catalog.
    pub fn from_definition(definition: &TableDefinition) -> ConfigResult<Self> {
        let mut builder = TableBuilder::new();
        builder.add_definition(definition);
        builder.build()
    }

    /// Prefixes in lookup order.
    pub fn prefixes(&self) -> &[PrefixEntry] {
        &self.prefixes
    }

    /// Symbols in lookup order.
    pub fn symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    /// Longest prefix that `text` starts with.
    pub fn match_prefix(&self, text: &str) -> Option<&PrefixEntry> {
        self.prefixes.iter().find(|p| text.starts_with(p.key.as_str()))
    }

    /// Longest symbol that `text` starts with.
    pub fn match_symbol(&self, text: &str) -> Option<&SymbolEntry> {
        self.symbols.iter().find(|s| text.starts_with(s.key.as_str()))
    }

    /// Exact symbol lookup.
    pub fn symbol(&self, key: &str) -> Option<&ParsedUnit> {
        self.symbols.iter().find(|s| s.key == key).map(|s| &s.unit)
    }

    /// Exact prefix lookup.
    pub fn prefix(&self, key: &str) -> Option<i32> {
        self.prefixes.iter().find(|p| p.key == key).map(|p| p.scale)
    }
}

/// Sort longer strings before shorter strings, then lexicographically.
pub(crate) fn longest_first(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}
