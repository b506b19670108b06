//! Serializable table definitions, used to load user tables from YAML.
//!
//! ```yaml
//! prefixes:
//!   - { key: "R", scale: 27, name: "ronna" }
//! symbols:
//!   - key: "bar"
//!     name: "bar"
//!     dims: { mass: 1, length: -1, time: -2 }
//!     scale: 8
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use mu_core::{DimVector, Dimension, Exponent, ParsedUnit};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{ConfigError, ConfigResult};

/// Exponents by dimension; missing dimensions are zero.
pub type DimMap = BTreeMap<Dimension, Exponent>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableDefinition {
    #[serde(default)]
    pub prefixes: Vec<PrefixDef>,
    #[serde(default)]
    pub symbols: Vec<SymbolDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrefixDef {
    pub key: String,
    pub scale: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolDef {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub dims: DimMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensionless: Vec<DimMap>,
    #[serde(default)]
    pub scale: i32,
}

impl SymbolDef {
    pub fn to_unit(&self) -> ParsedUnit {
        ParsedUnit::with_factors(
            to_vector(&self.dims),
            self.dimensionless.iter().map(to_vector).collect(),
            self.scale,
        )
    }
}

fn to_vector(map: &DimMap) -> DimVector {
    map.iter()
        .fold(DimVector::ZERO, |acc, (&dim, &exp)| acc.with(dim, exp))
}

fn to_map(vector: DimVector) -> DimMap {
    vector.iter().collect()
}

impl TableDefinition {
    /// The built-in SI catalog as a definition.
    pub fn standard() -> Self {
        let prefixes = catalog::standard_prefixes()
            .iter()
            .map(|p| PrefixDef {
                key: p.key.to_string(),
                scale: p.scale,
                name: Some(p.name.to_string()),
            })
            .collect();

        let symbols = catalog::standard_symbols()
            .iter()
            .map(|s| SymbolDef {
                key: s.key.to_string(),
                name: Some(s.name.to_string()),
                dims: to_map(s.dim),
                dimensionless: s.dimensionless.iter().copied().map(to_map).collect(),
                scale: s.scale,
            })
            .collect();

        Self { prefixes, symbols }
    }

    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Append the entries of `other`; duplicates surface when the tables are built.
    pub fn extend(&mut self, other: TableDefinition) {
        self.prefixes.extend(other.prefixes);
        self.symbols.extend(other.symbols);
    }
}
