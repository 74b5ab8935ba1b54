use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Number of SI base dimensions tracked by a [`UnitVector`].
pub const BASE_DIMENSIONS: usize = 7;

/// The seven SI base dimensions, in the order their exponents are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    Time,
    Length,
    Mass,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Time,
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::ElectricCurrent,
        BaseDimension::Temperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the SI base unit for this dimension.
    pub fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Time => "s",
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::ElectricCurrent => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::AmountOfSubstance => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }
}

/// Exponents of the SI base dimensions making up a unit.
///
/// The all-zero vector is the unit of a dimensionless quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UnitVector([i32; BASE_DIMENSIONS]);

impl UnitVector {
    pub const DIMENSIONLESS: UnitVector = UnitVector([0; BASE_DIMENSIONS]);
    pub const SECOND: UnitVector = UnitVector([1, 0, 0, 0, 0, 0, 0]);
    pub const METRE: UnitVector = UnitVector([0, 1, 0, 0, 0, 0, 0]);
    pub const KILOGRAM: UnitVector = UnitVector([0, 0, 1, 0, 0, 0, 0]);
    pub const AMPERE: UnitVector = UnitVector([0, 0, 0, 1, 0, 0, 0]);
    pub const KELVIN: UnitVector = UnitVector([0, 0, 0, 0, 1, 0, 0]);
    pub const MOLE: UnitVector = UnitVector([0, 0, 0, 0, 0, 1, 0]);
    pub const CANDELA: UnitVector = UnitVector([0, 0, 0, 0, 0, 0, 1]);

    pub const fn new(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        UnitVector(exponents)
    }

    pub const fn from_exponents(
        time: i32,
        length: i32,
        mass: i32,
        electric_current: i32,
        temperature: i32,
        amount_of_substance: i32,
        luminous_intensity: i32,
    ) -> Self {
        UnitVector([
            time,
            length,
            mass,
            electric_current,
            temperature,
            amount_of_substance,
            luminous_intensity,
        ])
    }

    pub fn exponents(&self) -> [i32; BASE_DIMENSIONS] {
        self.0
    }

    pub fn exponent(&self, dimension: BaseDimension) -> i32 {
        self.0[dimension.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&exponent| exponent == 0)
    }

    /// True only for the bare mass base unit, whose SI name carries the
    /// implicit kilo prefix.
    pub fn is_kilogram(&self) -> bool {
        *self == UnitVector::KILOGRAM
    }

    /// Base dimensions with a nonzero exponent, paired with that exponent.
    pub fn components(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.exponent(dimension)))
            .filter(|&(_, exponent)| exponent != 0)
    }
}

impl From<[i32; BASE_DIMENSIONS]> for UnitVector {
    fn from(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        UnitVector(exponents)
    }
}

impl Index<BaseDimension> for UnitVector {
    type Output = i32;

    fn index(&self, dimension: BaseDimension) -> &i32 {
        &self.0[dimension.index()]
    }
}

impl Add for UnitVector {
    type Output = UnitVector;

    fn add(self, rhs: UnitVector) -> UnitVector {
        UnitVector(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for UnitVector {
    type Output = UnitVector;

    fn sub(self, rhs: UnitVector) -> UnitVector {
        UnitVector(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Mul<i32> for UnitVector {
    type Output = UnitVector;

    fn mul(self, rhs: i32) -> UnitVector {
        UnitVector(self.0.map(|exponent| exponent * rhs))
    }
}

impl Neg for UnitVector {
    type Output = UnitVector;

    fn neg(self) -> UnitVector {
        self * -1
    }
}

/// Comma separated exponents, the key used by the unit symbol table.
impl Display for UnitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|exponent| exponent.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)
    }
}
