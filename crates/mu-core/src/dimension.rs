//! Base dimensions and exponent vectors over them.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Exponent of a single base dimension.
pub type Exponent = i8;

/// The base dimensions of the unit space, in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Dimension {
    /// I: electric current
    Current,
    /// J: luminous intensity
    Intensity,
    /// L
    Length,
    /// M
    Mass,
    /// N: amount of substance
    Amount,
    /// T
    Time,
    /// Θ: absolute temperature
    Temperature,
    /// ΘC: Celsius temperature
    TemperatureC,
}

impl Dimension {
    pub const COUNT: usize = 8;

    pub const ALL: [Dimension; Self::COUNT] = [
        Dimension::Current,
        Dimension::Intensity,
        Dimension::Length,
        Dimension::Mass,
        Dimension::Amount,
        Dimension::Time,
        Dimension::Temperature,
        Dimension::TemperatureC,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short symbol used when rendering a vector.
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Current => "I",
            Dimension::Intensity => "J",
            Dimension::Length => "L",
            Dimension::Mass => "M",
            Dimension::Amount => "N",
            Dimension::Time => "T",
            Dimension::Temperature => "Θ",
            Dimension::TemperatureC => "ΘC",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point in dimensional unit space: one exponent per base dimension.
///
/// Arithmetic is componentwise and wraps like the underlying `i8`; real unit
/// expressions stay far away from the bounds.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DimVector([Exponent; Dimension::COUNT]);

impl DimVector {
    pub const ZERO: DimVector = DimVector([0; Dimension::COUNT]);

    pub const fn new(exponents: [Exponent; Dimension::COUNT]) -> Self {
        Self(exponents)
    }

    /// Vector with a single non-zero component.
    pub const fn of(dim: Dimension, exp: Exponent) -> Self {
        Self::ZERO.with(dim, exp)
    }

    /// Copy of `self` with the component for `dim` replaced by `exp`.
    pub const fn with(self, dim: Dimension, exp: Exponent) -> Self {
        let mut exponents = self.0;
        exponents[dim.index()] = exp;
        Self(exponents)
    }

    #[inline]
    pub const fn get(&self, dim: Dimension) -> Exponent {
        self.0[dim.index()]
    }

    pub const fn exponents(&self) -> [Exponent; Dimension::COUNT] {
        self.0
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Non-zero components in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Exponent)> + '_ {
        Dimension::ALL
            .iter()
            .map(|&d| (d, self.get(d)))
            .filter(|&(_, e)| e != 0)
    }

    pub fn scaled(self, factor: Exponent) -> Self {
        Self(self.0.map(|e| e.wrapping_mul(factor)))
    }
}

impl Add for DimVector {
    type Output = DimVector;

    fn add(self, rhs: DimVector) -> DimVector {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(rhs.0) {
            *a = a.wrapping_add(b);
        }
        DimVector(out)
    }
}

impl AddAssign for DimVector {
    fn add_assign(&mut self, rhs: DimVector) {
        *self = *self + rhs;
    }
}

impl Neg for DimVector {
    type Output = DimVector;

    fn neg(self) -> DimVector {
        DimVector(self.0.map(|e| e.wrapping_neg()))
    }
}

impl Sub for DimVector {
    type Output = DimVector;

    fn sub(self, rhs: DimVector) -> DimVector {
        self + -rhs
    }
}

impl Mul<Exponent> for DimVector {
    type Output = DimVector;

    fn mul(self, rhs: Exponent) -> DimVector {
        self.scaled(rhs)
    }
}

impl Sum for DimVector {
    fn sum<I: Iterator<Item = DimVector>>(iter: I) -> DimVector {
        iter.fold(DimVector::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a DimVector> for DimVector {
    fn sum<I: Iterator<Item = &'a DimVector>>(iter: I) -> DimVector {
        iter.copied().sum()
    }
}

impl fmt::Display for DimVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (dim, exp) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}^{}", dim.label(), exp)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for DimVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DimVector({})", self)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn small_vector() -> impl Strategy<Value = DimVector> {
        prop::array::uniform8(-8_i8..=8).prop_map(DimVector::new)
    }

    proptest! {
        #[test]
        fn addition_commutes(a in small_vector(), b in small_vector()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn negation_is_additive_inverse(a in small_vector()) {
            prop_assert!((a + -a).is_dimensionless());
        }

        #[test]
        fn scaling_distributes(a in small_vector(), b in small_vector(), k in -4_i8..=4) {
            prop_assert_eq!((a + b) * k, a * k + b * k);
        }
    }
}
