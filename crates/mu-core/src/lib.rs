//! mu-core: stable foundation for measurement units.
//!
//! Contains:
//! - dimension (the 8 base dimensions + exponent vectors over them)
//! - unit (parsed-unit algebra: multiply, reciprocal, exponentiate, product)
//! - numeric (Real + tolerances + checked power-of-ten scaling)
//! - error (shared numeric error types)

pub mod dimension;
pub mod error;
pub mod numeric;
pub mod unit;

// Re-exports: nice ergonomics for downstream crates
pub use dimension::{DimVector, Dimension, Exponent};
pub use error::{NumericError, NumericResult};
pub use numeric::*;
pub use unit::ParsedUnit;
