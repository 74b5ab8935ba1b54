use crate::error::EquationError;
use crate::function::Function;
use crate::operator::Operator;
use logos::{Logos, Span};
use std::fmt::Display;

#[derive(Debug, PartialEq, Clone, Default)]
pub enum LexingError {
    #[default]
    InvalidToken,
}

/// Lexical token of a formula or of a stored postfix program.
///
/// A run of ASCII letters, digits, underscores and dots is a
/// [`Token::Name`]; numbers and variables are not told apart until
/// evaluation. Function names only match as whole runs, so
/// `sinh` and `sin2` are not read as `sin`.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexingError)]
#[logos(skip r"\s+")]
pub enum Token {
    #[regex(r"[A-Za-z0-9_.]+", |lex| lex.slice().to_string())]
    Name(String),
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    #[token("*", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    #[token("^", |_| Operator::Power)]
    Operator(Operator),
    #[token("sin", |_| Function::Sin)]
    #[token("cos", |_| Function::Cos)]
    #[token("tan", |_| Function::Tan)]
    #[token("cot", |_| Function::Cot)]
    #[token("csc", |_| Function::Csc)]
    #[token("sec", |_| Function::Sec)]
    #[token("arcsin", |_| Function::Arcsin)]
    #[token("arccos", |_| Function::Arccos)]
    #[token("arctan", |_| Function::Arctan)]
    #[token("arccot", |_| Function::Arccot)]
    #[token("arcsec", |_| Function::Arcsec)]
    #[token("arccsc", |_| Function::Arccsc)]
    #[token("sinh", |_| Function::Sinh)]
    #[token("cosh", |_| Function::Cosh)]
    #[token("tanh", |_| Function::Tanh)]
    #[token("coth", |_| Function::Coth)]
    #[token("csch", |_| Function::Csch)]
    #[token("sech", |_| Function::Sech)]
    #[token("arcsinh", |_| Function::Arcsinh)]
    #[token("arccosh", |_| Function::Arccosh)]
    #[token("arctanh", |_| Function::Arctanh)]
    #[token("arccoth", |_| Function::Arccoth)]
    #[token("arcsech", |_| Function::Arcsech)]
    #[token("arccsch", |_| Function::Arccsch)]
    #[token("ln", |_| Function::Ln)]
    #[token("log10", |_| Function::Log10)]
    #[token("log", |_| Function::Log)]
    #[token("abs", |_| Function::Abs)]
    #[token("min", |_| Function::Min)]
    #[token("max", |_| Function::Max)]
    Function(Function),
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(",")]
    Comma,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Name(name) => write!(f, "{}", name),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Function(function) => write!(f, "{}", function),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
        }
    }
}

pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, LexingError>, Span)> + '_ {
    Token::lexer(input).spanned()
}

/// Splits a formula into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EquationError> {
    lex(input)
        .map(|(token, span)| {
            token.map_err(|_| EquationError::UnexpectedCharacter {
                found: input[span.clone()].to_string(),
                offset: span.start,
            })
        })
        .collect()
}
