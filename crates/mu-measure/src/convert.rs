//! Conversion engine: parse measurements, take reciprocals, and rescale
//! products of measurements into a target unit.

use std::borrow::Cow;
use std::sync::Arc;

use mu_core::{Real, checked_product, checked_reciprocal, scale_pow10};
use mu_parse::UnitParser;
use mu_tables::{ConfigResult, Tables, build_tables};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MeasureError, MeasureResult};
use crate::measurement::{Measure, Measurement, RawMeasurement};

/// Conversion context over a shared, immutable set of tables.
///
/// Cloning is cheap; clones share the same tables.
#[derive(Debug, Clone)]
pub struct Units {
    tables: Arc<Tables>,
}

/// One independent conversion for [`Units::convert_batch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionJob {
    pub target: String,
    pub inputs: Vec<RawMeasurement>,
}

impl Units {
    pub fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }

    /// Context over the standard SI tables.
    pub fn standard() -> ConfigResult<Self> {
        Ok(Self::new(Arc::new(build_tables()?)))
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    fn parser(&self) -> UnitParser<'_> {
        UnitParser::new(&self.tables)
    }

    /// Resolve `unit` and attach it to `quantity`. Empty text is a
    /// dimensionless measurement.
    pub fn parse(&self, quantity: Real, unit: &str) -> MeasureResult<Measure> {
        let parsed = self.parser().parse(unit)?;
        debug!(unit, scale = parsed.scale, product = %parsed.product(), "parsed measurement");
        Ok(Measure::new(quantity, unit, parsed))
    }

    /// Borrow an already-resolved measurement, or parse a foreign one.
    fn resolve<'m>(&self, m: &'m dyn Measurement) -> MeasureResult<Cow<'m, Measure>> {
        match m.resolved() {
            Some(measure) => Ok(Cow::Borrowed(measure)),
            None => self
                .parse(m.quantity(), m.measurement_unit())
                .map(Cow::Owned),
        }
    }

    /// `1 / m`. The unit text of the result is `(text)^-1`, or empty for a
    /// dimensionless input; convert it with [`Units::new_measurement`] to get
    /// a specific unit.
    ///
    /// # Errors
    ///
    /// `DivideByZero` for a zero quantity, and `Overflow` when the quantity is
    /// so small that its inverse is not finite.
    pub fn reciprocal(&self, m: &dyn Measurement) -> MeasureResult<Measure> {
        let m = self.resolve(m)?;
        let value = checked_reciprocal(m.value())?;
        let unit = if m.unit().is_empty() {
            String::new()
        } else {
            format!("({})^-1", m.unit())
        };
        Ok(Measure::new(value, unit, m.parsed().reciprocal()))
    }

    /// Multiply `first` and `rest` together and express the product in
    /// `target`.
    ///
    /// # Errors
    ///
    /// `WrongDimension` when the product does not have the dimensions of
    /// `target`. `Underflow` or `Overflow` when the value cannot be
    /// represented, either while multiplying the quantities together or
    /// after rescaling into `target`.
    pub fn new_measurement(
        &self,
        target: &str,
        first: &dyn Measurement,
        rest: &[&dyn Measurement],
    ) -> MeasureResult<Measure> {
        let first = self.resolve(first)?;
        let mut value = first.value();
        let mut unit = first.parsed().clone();

        for m in rest {
            let m = self.resolve(*m)?;
            value = checked_product(value, m.value())?;
            unit = unit.multiply(m.parsed());
        }

        let target_unit = self.parser().parse(target)?;
        let (expected, found) = (target_unit.product(), unit.product());
        if expected != found {
            return Err(MeasureError::WrongDimension { expected, found });
        }

        let shift = unit.scale.saturating_sub(target_unit.scale);
        debug!(target, shift, product = %found, "rescaling measurement");
        let value = scale_pow10(value, shift)?;

        Ok(Measure::new(value, target, target_unit))
    }

    /// [`Units::new_measurement`] over a slice of inputs.
    pub fn convert(&self, target: &str, inputs: &[&dyn Measurement]) -> MeasureResult<Measure> {
        let (first, rest) = inputs
            .split_first()
            .ok_or(MeasureError::NothingToConvert)?;
        self.new_measurement(target, *first, rest)
    }

    /// Run independent conversions in parallel. Results are in job order.
    pub fn convert_batch(&self, jobs: &[ConversionJob]) -> Vec<MeasureResult<Measure>> {
        debug!(jobs = jobs.len(), "converting batch");
        jobs.par_iter()
            .map(|job| {
                let inputs: Vec<&dyn Measurement> = job
                    .inputs
                    .iter()
                    .map(|raw| raw as &dyn Measurement)
                    .collect();
                self.convert(&job.target, &inputs)
            })
            .collect()
    }
}

/// Unwrap a conversion result, panicking with the error message.
///
/// For tests and literals known to be valid; everything else should handle
/// the `Result`.
pub fn must<T>(result: MeasureResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
