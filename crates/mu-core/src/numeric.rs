use crate::{NumericError, NumericResult};

/// Floating point type used throughout system
pub type Real = f64;

/// 0 °C in K
pub const ZERO_CELSIUS_IN_KELVIN: Real = 273.15;

/// Largest power of ten applied in a single multiplication.
const MAX_SINGLE_STEP: i32 = 300;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

#[inline]
pub fn pow10(exponent: i32) -> Real {
    (10.0 as Real).powi(exponent)
}

/// Multiply `value` by `10^exponent`, rejecting results that lost the value.
///
/// Large exponents are applied in two halves so that `10^exponent` itself
/// never has to be representable.
pub fn scale_pow10(value: Real, exponent: i32) -> NumericResult<Real> {
    if value == 0.0 {
        return Ok(value);
    }
    let scaled = if exponent.unsigned_abs() <= MAX_SINGLE_STEP.unsigned_abs() {
        value * pow10(exponent)
    } else {
        let half = exponent / 2;
        value * pow10(half) * pow10(exponent - half)
    };

    if scaled == 0.0 && value != 0.0 {
        return Err(NumericError::Underflow { value, exponent });
    }
    if scaled.is_infinite() {
        return Err(NumericError::Overflow { value, exponent });
    }
    Ok(scaled)
}

/// Multiply two quantities, rejecting a product that rounded away to zero or
/// grew past the largest finite value.
pub fn checked_product(a: Real, b: Real) -> NumericResult<Real> {
    let product = a * b;
    if product == 0.0 && a != 0.0 && b != 0.0 {
        return Err(NumericError::Underflow {
            value: a,
            exponent: 0,
        });
    }
    if product.is_infinite() {
        return Err(NumericError::Overflow {
            value: a,
            exponent: 0,
        });
    }
    Ok(product)
}

pub fn checked_reciprocal(value: Real) -> NumericResult<Real> {
    if value == 0.0 {
        return Err(NumericError::DivideByZero);
    }
    let inverse = 1.0 / value;
    if inverse.is_infinite() {
        return Err(NumericError::Overflow { value, exponent: 0 });
    }
    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn scale_small_exponents_exact() {
        assert_eq!(scale_pow10(3.0, 3).unwrap(), 3000.0);
        assert_eq!(scale_pow10(1.0, 6).unwrap(), 1e6);
        assert_eq!(scale_pow10(0.5, 0).unwrap(), 0.5);
    }

    #[test]
    fn scale_zero_is_not_underflow() {
        assert_eq!(scale_pow10(0.0, -400).unwrap(), 0.0);
        assert_eq!(scale_pow10(0.0, i32::MAX).unwrap(), 0.0);
    }

    #[test]
    fn scale_at_exponent_extremes() {
        assert!(matches!(
            scale_pow10(1.0, i32::MIN),
            Err(NumericError::Underflow { exponent: i32::MIN, .. })
        ));
        assert!(matches!(
            scale_pow10(1.0, i32::MAX),
            Err(NumericError::Overflow { exponent: i32::MAX, .. })
        ));
    }

    #[test]
    fn scale_detects_underflow() {
        let err = scale_pow10(Real::from_bits(1), -1).unwrap_err();
        assert!(matches!(err, NumericError::Underflow { exponent: -1, .. }));
    }

    #[test]
    fn scale_detects_overflow() {
        let err = scale_pow10(1.0, 336).unwrap_err();
        assert!(matches!(err, NumericError::Overflow { .. }));
        assert!(scale_pow10(1.0, 288).is_ok());
    }

    #[test]
    fn scale_large_exponent_without_intermediate_overflow() {
        // 10^400 is not representable but 1e-300 * 10^400 is.
        let v = scale_pow10(1e-300, 400).unwrap();
        assert!(nearly_equal(v, 1e100, Tolerances::default()));
    }

    #[test]
    fn product_underflow_and_overflow() {
        let tiny = Real::from_bits(1);
        assert!(matches!(
            checked_product(tiny, 0.5),
            Err(NumericError::Underflow { .. })
        ));
        assert!(matches!(
            checked_product(Real::MAX, 2.0),
            Err(NumericError::Overflow { .. })
        ));
        assert_eq!(checked_product(0.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn reciprocal_of_zero() {
        assert_eq!(checked_reciprocal(0.0), Err(NumericError::DivideByZero));
        assert_eq!(checked_reciprocal(-0.0), Err(NumericError::DivideByZero));
        assert_eq!(checked_reciprocal(4.0).unwrap(), 0.25);
    }

    #[test]
    fn reciprocal_of_subnormal_overflows() {
        assert!(matches!(
            checked_reciprocal(Real::from_bits(1)),
            Err(NumericError::Overflow { .. })
        ));
    }
}
