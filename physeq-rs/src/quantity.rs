use crate::error::EquationError;
use crate::unit::UnitVector;
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Function results above this magnitude are reported as infinite.
const OVERFLOW_LIMIT: f64 = 1e9;
/// Function results below this magnitude are reported as exactly zero.
const UNDERFLOW_LIMIT: f64 = 1e-9;

/// Scale of the kilo prefix. A bare kilogram is stored gram-based, so its
/// scale carries this offset relative to every other unit.
const KILO: i32 = 3;

/// A magnitude with a decimal scale and an SI dimension.
///
/// The value expressed in the stated prefix is `magnitude * 10^scale`.
/// Quantities are plain values: every operation builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quantity {
    magnitude: f64,
    scale: i32,
    unit: UnitVector,
}

impl Quantity {
    pub const fn new(magnitude: f64, scale: i32, unit: UnitVector) -> Self {
        Quantity {
            magnitude,
            scale,
            unit,
        }
    }

    /// A dimensionless quantity at scale 0.
    pub const fn constant(value: f64) -> Self {
        Quantity::new(value, 0, UnitVector::DIMENSIONLESS)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn unit(&self) -> UnitVector {
        self.unit
    }

    /// Magnitude this quantity would have if its scale were `target`.
    pub fn convert_to_scale(&self, target: i32) -> f64 {
        let difference = self.scale - target;
        if difference >= 0 {
            self.magnitude * 10f64.powi(difference)
        } else {
            self.magnitude / 10f64.powi(-difference)
        }
    }

    /// The same value re-expressed at another scale.
    pub fn with_scale(&self, target: i32) -> Quantity {
        Quantity::new(self.convert_to_scale(target), target, self.unit)
    }

    /// Re-expresses the value at scale 0. A bare kilogram drops its kilo
    /// offset so the magnitude reads in kilograms.
    pub fn normalize_to_base_scale(&self) -> Quantity {
        Quantity::new(self.convert_to_scale(kilo_offset(self.unit)), 0, self.unit)
    }

    /// Inverse of [`Quantity::normalize_to_base_scale`] for a base-scale `value`.
    fn from_base_value(value: f64, unit: UnitVector) -> Quantity {
        Quantity::new(value, kilo_offset(unit), unit)
    }

    /// Scale relative to the SI base unit, with the kilo offset of a bare
    /// kilogram taken out.
    fn base_scale(&self) -> i32 {
        self.scale - kilo_offset(self.unit)
    }

    pub fn try_add(&self, other: &Quantity) -> Result<Quantity, EquationError> {
        self.ensure_same_unit(other)?;
        Ok(Quantity::new(
            self.magnitude + other.convert_to_scale(self.scale),
            self.scale,
            self.unit,
        ))
    }

    pub fn try_subtract(&self, other: &Quantity) -> Result<Quantity, EquationError> {
        self.ensure_same_unit(other)?;
        Ok(Quantity::new(
            self.magnitude - other.convert_to_scale(self.scale),
            self.scale,
            self.unit,
        ))
    }

    /// Product of two quantities.
    ///
    /// Magnitudes multiply and base scales add, so the value is exact for
    /// any prefixes. A result that is a bare kilogram gets the kilo offset
    /// back: `0.5 * 1kg` is `0.5kg` and `1kg * 1kg` is `1kg^(2)` at scale 0.
    pub fn multiply(&self, other: &Quantity) -> Quantity {
        let unit = self.unit + other.unit;
        Quantity::new(
            self.magnitude * other.magnitude,
            self.base_scale() + other.base_scale() + kilo_offset(unit),
            unit,
        )
    }

    /// Quotient of two quantities, with scales handled as in
    /// [`Quantity::multiply`].
    pub fn divide(&self, other: &Quantity) -> Quantity {
        let unit = self.unit - other.unit;
        Quantity::new(
            self.magnitude / other.magnitude,
            self.base_scale() - other.base_scale() + kilo_offset(unit),
            unit,
        )
    }

    /// Raises this quantity to a dimensionless power.
    ///
    /// The computation happens at base scale and the result is brought back
    /// to this quantity's scale. Dimensions are multiplied by the exponent,
    /// which therefore has to be integral unless this quantity is
    /// dimensionless.
    pub fn power(&self, exponent: &Quantity) -> Result<Quantity, EquationError> {
        if !exponent.is_dimensionless() {
            return Err(EquationError::ExponentHasUnits(exponent.unit));
        }
        let power = exponent.convert_to_scale(0);
        let unit = if self.is_dimensionless() {
            self.unit
        } else if power.fract() == 0.0 && power.abs() <= f64::from(i32::MAX) {
            self.unit * power as i32
        } else {
            return Err(EquationError::FractionalExponent {
                unit: self.unit,
                exponent: power,
            });
        };
        let base = self.normalize_to_base_scale().magnitude;
        Ok(Quantity::from_base_value(base.powf(power), unit).with_scale(self.scale))
    }

    /// Applies a real function to a dimensionless quantity. The result is a
    /// constant with overflow clamped to infinity and noise snapped to zero.
    pub fn map_dimensionless(
        &self,
        function: impl FnOnce(f64) -> f64,
    ) -> Result<Quantity, EquationError> {
        self.ensure_dimensionless()?;
        Ok(Quantity::constant(sanitize(function(
            self.convert_to_scale(0),
        ))))
    }

    /// Logarithm of this quantity in the given base.
    pub fn log(&self, base: &Quantity) -> Result<Quantity, EquationError> {
        self.ensure_dimensionless()?;
        base.ensure_dimensionless()?;
        let value = self.convert_to_scale(0).ln() / base.convert_to_scale(0).ln();
        Ok(Quantity::constant(sanitize(value)))
    }

    pub fn abs(&self) -> Result<Quantity, EquationError> {
        self.map_dimensionless(f64::abs)
    }

    pub fn min(&self, _other: &Quantity) -> Result<Quantity, EquationError> {
        Err(EquationError::NotImplemented("min"))
    }

    pub fn max(&self, _other: &Quantity) -> Result<Quantity, EquationError> {
        Err(EquationError::NotImplemented("max"))
    }

    pub fn is_equal_unit(&self, other: &Quantity) -> bool {
        self.unit == other.unit
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    pub fn is_negative(&self) -> bool {
        self.magnitude < 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.magnitude > 0.0
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }

    /// Compares units exactly and base-scale values within a relative
    /// tolerance.
    pub fn approx_eq(&self, other: &Quantity, tolerance: f64) -> bool {
        if !self.is_equal_unit(other) {
            return false;
        }
        let lhs = self.normalize_to_base_scale().magnitude;
        let rhs = other.normalize_to_base_scale().magnitude;
        (lhs - rhs).abs() <= tolerance * lhs.abs().max(rhs.abs()).max(1.0)
    }

    fn ensure_same_unit(&self, other: &Quantity) -> Result<(), EquationError> {
        if self.is_equal_unit(other) {
            Ok(())
        } else {
            Err(EquationError::DimensionMismatch {
                expected: self.unit,
                found: other.unit,
            })
        }
    }

    fn ensure_dimensionless(&self) -> Result<(), EquationError> {
        if self.is_dimensionless() {
            Ok(())
        } else {
            Err(EquationError::DimensionMismatch {
                expected: UnitVector::DIMENSIONLESS,
                found: self.unit,
            })
        }
    }
}

fn kilo_offset(unit: UnitVector) -> i32 {
    if unit.is_kilogram() { KILO } else { 0 }
}

fn sanitize(value: f64) -> f64 {
    if value > OVERFLOW_LIMIT {
        f64::INFINITY
    } else if value < -OVERFLOW_LIMIT {
        f64::NEG_INFINITY
    } else if value.abs() < UNDERFLOW_LIMIT {
        0.0
    } else {
        value
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        self.multiply(&rhs)
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        self.divide(&rhs)
    }
}
