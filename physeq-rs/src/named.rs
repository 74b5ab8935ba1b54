use crate::error::EquationError;
use crate::quantity::Quantity;
use crate::unit::UnitVector;
use serde::{Deserialize, Serialize};

/// A quantity bound to the identifier it is referenced by in a formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedQuantity {
    id: String,
    quantity: Quantity,
}

impl NamedQuantity {
    pub fn new(id: impl Into<String>, quantity: Quantity) -> Self {
        NamedQuantity {
            id: id.into(),
            quantity,
        }
    }

    pub fn from_values(id: impl Into<String>, magnitude: f64, scale: i32, unit: UnitVector) -> Self {
        NamedQuantity::new(id, Quantity::new(magnitude, scale, unit))
    }

    pub fn constant(id: impl Into<String>, value: f64) -> Self {
        NamedQuantity::new(id, Quantity::constant(value))
    }

    /// Binds `id` to a quantity in its serialized `magnitude,scale,u0..u6` form.
    pub fn parse(id: impl Into<String>, serialized: &str) -> Result<Self, EquationError> {
        Ok(NamedQuantity::new(id, serialized.parse()?))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn into_quantity(self) -> Quantity {
        self.quantity
    }
}
