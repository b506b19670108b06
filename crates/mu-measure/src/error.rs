//! Error types for measurement construction and conversion.

use mu_core::{DimVector, NumericError};
use mu_parse::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error("wrong dimension: target is [{expected}], measurements give [{found}]")]
    WrongDimension {
        expected: DimVector,
        found: DimVector,
    },

    #[error("no measurements to convert")]
    NothingToConvert,
}

pub type MeasureResult<T> = Result<T, MeasureError>;

impl MeasureError {
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, Self::Numeric(NumericError::DivideByZero))
    }

    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Numeric(NumericError::Underflow { .. }))
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Numeric(NumericError::Overflow { .. }))
    }
}
