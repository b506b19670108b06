//! mu-measure: measurements and unit conversion.
//!
//! A [`Units`] context holds the shared tables and offers three operations:
//! - [`Units::parse`] attaches a resolved unit to a quantity
//! - [`Units::reciprocal`] inverts a measurement
//! - [`Units::new_measurement`] multiplies measurements and expresses the
//!   product in a target unit
//!
//! # Example
//!
//! ```
//! use mu_measure::{Units, must};
//!
//! let units = Units::standard().unwrap();
//! let mass = must(units.parse(3.0, "g"));
//! let per_volume = must(units.reciprocal(&must(units.parse(3.0, "ml"))));
//! let conc = must(units.new_measurement("mg/L", &mass, &[&per_volume]));
//! assert_eq!(conc.value(), 1e6);
//! assert_eq!(conc.unit(), "mg/L");
//! ```

pub mod convert;
pub mod error;
pub mod measurement;

pub use convert::{ConversionJob, Units, must};
pub use error::{MeasureError, MeasureResult};
pub use measurement::{Measure, Measurement, RawMeasurement};
pub use mu_core::ZERO_CELSIUS_IN_KELVIN;
