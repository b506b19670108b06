//! mu-tables: prefix and symbol lookup tables for unit parsing.
//!
//! Provides:
//! - The built-in SI catalog (prefixes `da`..`y`, symbols `m`..`Da`)
//! - A builder that rejects duplicate keys and freezes tables longest-key-first
//! - YAML table definitions for user-supplied units
//!
//! # Example
//!
//! ```
//! use mu_tables::build_tables;
//!
//! let tables = build_tables().unwrap();
//! assert_eq!(tables.match_prefix("kmol").unwrap().scale, 3);
//! assert_eq!(tables.match_symbol("mol/s").unwrap().key, "mol");
//! ```

pub mod builder;
pub mod catalog;
pub mod definition;
pub mod error;
pub mod tables;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::TableBuilder;
pub use definition::{PrefixDef, SymbolDef, TableDefinition};
pub use error::{ConfigError, ConfigResult, TableKind};
pub use tables::{PrefixEntry, SymbolEntry, Tables};

/// Build the standard SI tables. Call once at startup and share the result.
pub fn build_tables() -> ConfigResult<Tables> {
    TableBuilder::standard().build()
}

/// Build the standard tables extended with a user definition.
pub fn build_tables_with(extra: &TableDefinition) -> ConfigResult<Tables> {
    let mut builder = TableBuilder::standard();
    builder.add_definition(extra);
    builder.build()
}
