//! Measurements: a quantity paired with the unit text it was given in.

use core::fmt;

use mu_core::{ParsedUnit, Real};
use serde::{Deserialize, Serialize};

/// Anything that carries a quantity and unit text.
///
/// Implementations other than [`Measure`] are re-parsed when they reach the
/// conversion engine.
pub trait Measurement {
    fn quantity(&self) -> Real;

    /// Unit text exactly as given.
    fn measurement_unit(&self) -> &str;

    /// The already-resolved form, if this value carries one.
    fn resolved(&self) -> Option<&Measure> {
        None
    }
}

/// A measurement whose unit text has been parsed against a set of tables.
///
/// Only [`crate::Units`] constructs these.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    value: Real,
    unit: String,
    parsed: ParsedUnit,
}

impl Measure {
    pub(crate) fn new(value: Real, unit: impl Into<String>, parsed: ParsedUnit) -> Self {
        Self {
            value,
            unit: unit.into(),
            parsed,
        }
    }

    pub fn value(&self) -> Real {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn parsed(&self) -> &ParsedUnit {
        &self.parsed
    }

    /// Drop the resolved unit, keeping quantity and text.
    pub fn to_raw(&self) -> RawMeasurement {
        RawMeasurement::new(self.value, self.unit.clone())
    }
}

impl Measurement for Measure {
    fn quantity(&self) -> Real {
        self.value
    }

    fn measurement_unit(&self) -> &str {
        &self.unit
    }

    fn resolved(&self) -> Option<&Measure> {
        Some(self)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// Plain quantity and unit text, as exchanged with hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurement {
    pub value: Real,
    #[serde(default)]
    pub unit: String,
}

impl RawMeasurement {
    pub fn new(value: Real, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl Measurement for RawMeasurement {
    fn quantity(&self) -> Real {
        self.value
    }

    fn measurement_unit(&self) -> &str {
        &self.unit
    }
}

impl From<Measure> for RawMeasurement {
    fn from(measure: Measure) -> Self {
        Self {
            value: measure.value,
            unit: measure.unit,
        }
    }
}
