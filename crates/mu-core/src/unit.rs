//! Parsed-unit algebra.

use core::fmt;

use crate::dimension::{DimVector, Exponent};

/// Resolved meaning of a unit expression.
///
/// Operations are strongly normalizing: every combination folds the
/// dimensionless factors of its inputs into a single vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParsedUnit {
    /// For normal units, the unit dimensions
    pub dim: DimVector,
    /// For dimensionless units (e.g. `rad`), the unfolded factors whose
    /// product should be one.
    pub dimensionless: Vec<DimVector>,
    /// Power of ten relative to the table reference unit. Saturates rather
    /// than wrapping.
    pub scale: i32,
}

impl ParsedUnit {
    pub fn new(dim: DimVector, scale: i32) -> Self {
        Self {
            dim,
            dimensionless: Vec::new(),
            scale,
        }
    }

    pub fn with_factors(dim: DimVector, dimensionless: Vec<DimVector>, scale: i32) -> Self {
        Self {
            dim,
            dimensionless,
            scale,
        }
    }

    /// The unit of a bare number.
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// Product of all dimension factors.
    pub fn product(&self) -> DimVector {
        self.dimensionless.iter().sum::<DimVector>() + self.dim
    }

    pub fn multiply(&self, other: &ParsedUnit) -> ParsedUnit {
        ParsedUnit::new(
            self.product() + other.product(),
            self.scale.saturating_add(other.scale),
        )
    }

    pub fn reciprocal(&self) -> ParsedUnit {
        ParsedUnit::new(-self.product(), self.scale.saturating_neg())
    }

    pub fn exponentiate(&self, exp: Exponent) -> ParsedUnit {
        ParsedUnit::new(self.product() * exp, i32::from(exp).saturating_mul(self.scale))
    }

    /// Same unit shifted by a prefix scale; factors are kept unfolded.
    pub fn with_scale_offset(&self, offset: i32) -> ParsedUnit {
        ParsedUnit {
            dim: self.dim,
            dimensionless: self.dimensionless.clone(),
            scale: self.scale.saturating_add(offset),
        }
    }

    /// Dimensional compatibility ignores scale.
    pub fn is_compatible(&self, other: &ParsedUnit) -> bool {
        self.product() == other.product()
    }
}

impl fmt::Display for ParsedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let product = self.product();
        if product.is_dimensionless() {
            write!(f, "1e{}", self.scale)
        } else {
            write!(f, "1e{} {}", self.scale, product)
        }
    }
}
