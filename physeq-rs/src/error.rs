use crate::unit::UnitVector;
use thiserror::Error;

/// Everything that can go wrong while building or evaluating an equation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    #[error("dimension mismatch: expected [{expected}], found [{found}]")]
    DimensionMismatch {
        expected: UnitVector,
        found: UnitVector,
    },
    #[error("exponent must be dimensionless, found [{0}]")]
    ExponentHasUnits(UnitVector),
    #[error("cannot raise a quantity with unit [{unit}] to the non-integral power {exponent}")]
    FractionalExponent { unit: UnitVector, exponent: f64 },
    #[error("`{token}` needs {expected} operand(s) but only {found} are available")]
    InsufficientOperands {
        token: String,
        expected: usize,
        found: usize,
    },
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),
    #[error("argument separator outside of a function call")]
    MisplacedComma,
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("unrecognized operator `{0}`")]
    UnrecognizedOperator(String),
    #[error("unexpected character `{found}` at offset {offset}")]
    UnexpectedCharacter { found: String, offset: usize },
    #[error("malformed serialized quantity `{input}`: {reason}")]
    MalformedSerializedQuantity { input: String, reason: String },
    #[error("`{0}` is not implemented")]
    NotImplemented(&'static str),
    #[error("program must leave exactly one value on the stack, left {0}")]
    MalformedProgram(usize),
}
