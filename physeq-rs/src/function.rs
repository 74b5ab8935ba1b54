use crate::error::EquationError;
use crate::quantity::Quantity;
use std::fmt::Display;

/// The closed set of functions a formula may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Cot,
    Csc,
    Sec,
    Arcsin,
    Arccos,
    Arctan,
    Arccot,
    Arcsec,
    Arccsc,
    Sinh,
    Cosh,
    Tanh,
    Coth,
    Csch,
    Sech,
    Arcsinh,
    Arccosh,
    Arctanh,
    Arccoth,
    Arcsech,
    Arccsch,
    Ln,
    Log10,
    Log,
    Abs,
    Min,
    Max,
}

impl Function {
    pub const ALL: [Function; 30] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Cot,
        Function::Csc,
        Function::Sec,
        Function::Arcsin,
        Function::Arccos,
        Function::Arctan,
        Function::Arccot,
        Function::Arcsec,
        Function::Arccsc,
        Function::Sinh,
        Function::Cosh,
        Function::Tanh,
        Function::Coth,
        Function::Csch,
        Function::Sech,
        Function::Arcsinh,
        Function::Arccosh,
        Function::Arctanh,
        Function::Arccoth,
        Function::Arcsech,
        Function::Arccsch,
        Function::Ln,
        Function::Log10,
        Function::Log,
        Function::Abs,
        Function::Min,
        Function::Max,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Cot => "cot",
            Function::Csc => "csc",
            Function::Sec => "sec",
            Function::Arcsin => "arcsin",
            Function::Arccos => "arccos",
            Function::Arctan => "arctan",
            Function::Arccot => "arccot",
            Function::Arcsec => "arcsec",
            Function::Arccsc => "arccsc",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Coth => "coth",
            Function::Csch => "csch",
            Function::Sech => "sech",
            Function::Arcsinh => "arcsinh",
            Function::Arccosh => "arccosh",
            Function::Arctanh => "arctanh",
            Function::Arccoth => "arccoth",
            Function::Arcsech => "arcsech",
            Function::Arccsch => "arccsch",
            Function::Ln => "ln",
            Function::Log10 => "log10",
            Function::Log => "log",
            Function::Abs => "abs",
            Function::Min => "min",
            Function::Max => "max",
        }
    }

    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL
            .into_iter()
            .find(|function| function.name() == name)
    }

    /// Number of operands the function consumes from the evaluation stack.
    pub fn arity(self) -> usize {
        match self {
            Function::Log | Function::Min | Function::Max => 2,
            _ => 1,
        }
    }

    /// Real-valued kernel of the single-argument transcendental functions.
    fn kernel(self) -> Option<fn(f64) -> f64> {
        let kernel: fn(f64) -> f64 = match self {
            Function::Sin => f64::sin,
            Function::Cos => f64::cos,
            Function::Tan => f64::tan,
            Function::Cot => |x| 1.0 / x.tan(),
            Function::Csc => |x| 1.0 / x.sin(),
            Function::Sec => |x| 1.0 / x.cos(),
            Function::Arcsin => f64::asin,
            Function::Arccos => f64::acos,
            Function::Arctan => f64::atan,
            Function::Arccot => |x| (1.0 / x).atan(),
            Function::Arcsec => |x| (1.0 / x).acos(),
            Function::Arccsc => |x| (1.0 / x).asin(),
            Function::Sinh => f64::sinh,
            Function::Cosh => f64::cosh,
            Function::Tanh => f64::tanh,
            Function::Coth => |x| 1.0 / x.tanh(),
            Function::Csch => |x| 1.0 / x.sinh(),
            Function::Sech => |x| 1.0 / x.cosh(),
            Function::Arcsinh => f64::asinh,
            Function::Arccosh => f64::acosh,
            Function::Arctanh => f64::atanh,
            Function::Arccoth => |x| (1.0 / x).atanh(),
            Function::Arcsech => |x| (1.0 / x).acosh(),
            Function::Arccsch => |x| (1.0 / x).asinh(),
            Function::Ln => f64::ln,
            Function::Log10 => f64::log10,
            Function::Log | Function::Abs | Function::Min | Function::Max => return None,
        };
        Some(kernel)
    }

    /// Calls the function on operands given in source order.
    pub fn apply(self, operands: &[Quantity]) -> Result<Quantity, EquationError> {
        if operands.len() < self.arity() {
            return Err(EquationError::InsufficientOperands {
                token: self.name().to_string(),
                expected: self.arity(),
                found: operands.len(),
            });
        }
        match (self, operands) {
            (Function::Log, [value, base, ..]) => value.log(base),
            (Function::Min, [lhs, rhs, ..]) => lhs.min(rhs),
            (Function::Max, [lhs, rhs, ..]) => lhs.max(rhs),
            (Function::Abs, [value, ..]) => value.abs(),
            (function, [value, ..]) => match function.kernel() {
                Some(kernel) => value.map_dimensionless(kernel),
                None => Err(EquationError::NotImplemented(function.name())),
            },
            (function, []) => Err(EquationError::InsufficientOperands {
                token: function.name().to_string(),
                expected: function.arity(),
                found: 0,
            }),
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
