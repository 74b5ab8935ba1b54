//! Infix to postfix conversion with the shunting-yard algorithm.

use crate::error::EquationError;
use crate::function::Function;
use crate::lexer::{Token, tokenize};
use crate::operator::Operator;
use crate::program::Program;
use tracing::debug;

/// Entries waiting on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Operator),
    Function(Function),
    LeftParen,
}

/// Pops pending operators and functions to the output until a `(` is on
/// top of the stack. Returns `false` if the stack runs out first.
fn unwind_to_paren(stack: &mut Vec<Pending>, output: &mut Vec<Token>) -> bool {
    loop {
        match stack.last() {
            None => return false,
            Some(Pending::LeftParen) => return true,
            Some(&Pending::Operator(operator)) => output.push(Token::Operator(operator)),
            Some(&Pending::Function(function)) => output.push(Token::Function(function)),
        }
        stack.pop();
    }
}

/// Reorders infix tokens into reverse Polish order.
///
/// A function is emitted as soon as the parenthesis closing its argument
/// list is seen, so it directly follows its arguments in the output.
pub fn to_postfix(tokens: impl IntoIterator<Item = Token>) -> Result<Vec<Token>, EquationError> {
    let mut output = Vec::new();
    let mut stack = Vec::new();
    for token in tokens {
        match token {
            Token::Name(_) => output.push(token),
            Token::Function(function) => stack.push(Pending::Function(function)),
            Token::Comma => {
                if !unwind_to_paren(&mut stack, &mut output) {
                    return Err(EquationError::MisplacedComma);
                }
            }
            Token::Operator(incoming) => {
                while let Some(&Pending::Operator(top)) = stack.last() {
                    if !top.yields_to(incoming) {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Operator(incoming));
            }
            Token::LeftParen => stack.push(Pending::LeftParen),
            Token::RightParen => {
                if !unwind_to_paren(&mut stack, &mut output) {
                    return Err(EquationError::UnbalancedParentheses);
                }
                stack.pop();
                if let Some(&Pending::Function(function)) = stack.last() {
                    stack.pop();
                    output.push(Token::Function(function));
                }
            }
        }
    }
    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(operator) => output.push(Token::Operator(operator)),
            Pending::Function(function) => output.push(Token::Function(function)),
            Pending::LeftParen => return Err(EquationError::UnbalancedParentheses),
        }
    }
    Ok(output)
}

/// Tokenizes and compiles an infix formula.
pub fn compile(formula: &str) -> Result<Program, EquationError> {
    let tokens = tokenize(formula)?;
    let program = Program::new(to_postfix(tokens)?);
    debug!(formula, postfix = %program, "compiled formula");
    Ok(program)
}

/// Compiles an infix formula into its space separated postfix form.
pub fn infix_to_postfix(formula: &str) -> Result<String, EquationError> {
    compile(formula).map(|program| program.to_string())
}
