use crate::error::EquationError;
use crate::quantity::Quantity;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Binary infix operators, in increasing binding strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 2,
            Operator::Multiply | Operator::Divide => 3,
            Operator::Power => 4,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Whether `self`, sitting on the operator stack, must be output before
    /// `incoming` is pushed.
    pub fn yields_to(self, incoming: Operator) -> bool {
        self.precedence() > incoming.precedence()
            || (self.precedence() == incoming.precedence()
                && incoming.associativity() == Associativity::Left)
    }

    /// Combines two operands as `lhs <op> rhs`.
    pub fn apply(self, lhs: &Quantity, rhs: &Quantity) -> Result<Quantity, EquationError> {
        match self {
            Operator::Add => lhs.try_add(rhs),
            Operator::Subtract => lhs.try_subtract(rhs),
            Operator::Multiply => Ok(lhs.multiply(rhs)),
            Operator::Divide => Ok(lhs.divide(rhs)),
            Operator::Power => lhs.power(rhs),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_is_right_associative() {
        assert!(!Operator::Power.yields_to(Operator::Power));
        assert!(Operator::Power.yields_to(Operator::Multiply));
    }

    #[test]
    fn same_tier_left_operators_yield() {
        assert!(Operator::Divide.yields_to(Operator::Multiply));
        assert!(Operator::Subtract.yields_to(Operator::Add));
        assert!(!Operator::Add.yields_to(Operator::Multiply));
    }

    #[test]
    fn symbols_round_trip() {
        for operator in Operator::ALL {
            assert_eq!(Operator::from_symbol(operator.symbol()), Some(operator));
        }
        assert_eq!(Operator::from_symbol("%"), None);
    }
}
