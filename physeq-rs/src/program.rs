use crate::error::EquationError;
use crate::lexer::{Token, tokenize};
use crate::named::NamedQuantity;
use crate::quantity::Quantity;
use std::fmt::Display;
use tracing::{debug, trace};

/// Built-in dimensionless constants, consulted after the bound members.
const CONSTANTS: [(&str, f64); 2] = [("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// A compiled equation: tokens in reverse Polish order.
///
/// A program holds no values, so one program can be evaluated any number of
/// times, from any thread, against different sets of members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    pub fn new(tokens: Vec<Token>) -> Self {
        Program { tokens }
    }

    /// Reads a stored postfix program, tokens separated by whitespace.
    pub fn from_postfix(text: &str) -> Result<Program, EquationError> {
        let tokens = tokenize(text)?;
        if let Some(token) = tokens.iter().find(|token| {
            matches!(
                token,
                Token::LeftParen | Token::RightParen | Token::Comma
            )
        }) {
            return Err(EquationError::UnrecognizedOperator(token.to_string()));
        }
        Ok(Program::new(tokens))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Names referenced by the program, in order of first use.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for token in &self.tokens {
            if let Token::Name(name) = token {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Runs the program against the given members.
    ///
    /// Anything that is not an operator or a function is an operand: a
    /// member with that id, else a numeric literal, else a built-in
    /// constant.
    pub fn evaluate(&self, members: &[NamedQuantity]) -> Result<Quantity, EquationError> {
        let mut stack: Vec<Quantity> = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            let value = match token {
                Token::Name(name) => resolve(name, members)?,
                Token::Operator(operator) => {
                    let operands = pop_operands(&mut stack, token, 2)?;
                    operator.apply(&operands[0], &operands[1])?
                }
                Token::Function(function) => {
                    let operands = pop_operands(&mut stack, token, function.arity())?;
                    function.apply(&operands)?
                }
                Token::LeftParen | Token::RightParen | Token::Comma => {
                    return Err(EquationError::UnrecognizedOperator(token.to_string()));
                }
            };
            trace!(%token, ?value, depth = stack.len() + 1, "evaluated token");
            stack.push(value);
        }
        match stack.as_slice() {
            [result] => {
                debug!(program = %self, ?result, "evaluated program");
                Ok(*result)
            }
            _ => Err(EquationError::MalformedProgram(stack.len())),
        }
    }
}

/// Takes the top `count` values off the stack, returned in push order.
fn pop_operands(
    stack: &mut Vec<Quantity>,
    token: &Token,
    count: usize,
) -> Result<Vec<Quantity>, EquationError> {
    if stack.len() < count {
        return Err(EquationError::InsufficientOperands {
            token: token.to_string(),
            expected: count,
            found: stack.len(),
        });
    }
    Ok(stack.split_off(stack.len() - count))
}

fn resolve(name: &str, members: &[NamedQuantity]) -> Result<Quantity, EquationError> {
    if let Some(member) = members.iter().find(|member| member.id() == name) {
        return Ok(*member.quantity());
    }
    if name.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        if let Ok(value) = name.parse::<f64>() {
            return Ok(Quantity::constant(value));
        }
    }
    CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|&(_, value)| Quantity::constant(value))
        .ok_or_else(|| EquationError::UnknownIdentifier(name.to_string()))
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", joined)
    }
}
