//! Dimensionally checked evaluation of physics formulas.
//!
//! A formula is tokenized, compiled into a postfix [`Program`] and evaluated
//! against [`NamedQuantity`] members. Every value is a [`Quantity`]: a
//! magnitude, a decimal scale and the exponents of the seven SI base
//! dimensions.

mod compiler;
mod display;
mod equation;
mod error;
mod function;
mod lexer;
mod named;
mod operator;
mod program;
mod quantity;
mod serial;
mod unit;

pub use crate::compiler::{compile, infix_to_postfix, to_postfix};
pub use crate::display::DisplayTables;
pub use crate::equation::Equation;
pub use crate::error::EquationError;
pub use crate::function::Function;
pub use crate::lexer::{Token, tokenize};
pub use crate::named::NamedQuantity;
pub use crate::operator::{Associativity, Operator};
pub use crate::program::Program;
pub use crate::quantity::Quantity;
pub use crate::unit::{BASE_DIMENSIONS, BaseDimension, UnitVector};
