//! Result and errors.
use crate::{
    tokens::{Span, TokenKind},
    types::ValueType,
};
use smol_str::SmolStr;
use std::fmt::{self, Display, Formatter};

pub type TinycResult<T> = std::result::Result<T, TinycError>;

/// Failure of a compilation stage.
///
/// Every error is final. Stages stop at the first error and
/// hand it to the caller unchanged.
#[derive(Debug)]
pub enum TinycError {
    /// Source text contained no characters at all.
    EmptyInput,
    /// Number literal does not fit in a 32-bit integer.
    InvalidNumber { text: String, span: Span },
    UnexpectedToken {
        expected: Expected,
        actual: TokenKind,
        actual_text: String,
        span: Span,
    },
    /// Token stream ran out while the parser still required a token.
    UnexpectedEndOfInput { expected: Expected },
    /// A variable was declared twice in the same function.
    VariableRedefinition { name: SmolStr, span: Span },
    UndefinedVariable { name: SmolStr, span: Span },
    /// Only functions returning `int` can be compiled.
    UnsupportedReturnType { found: ValueType },
    Fmt(fmt::Error),
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    /// Start of a definition, assignment or return.
    Statement,
    /// Variable name or number literal.
    Expression,
    EndOfInput,
}

impl TinycError {
    /// Location in the source the error refers to, if any.
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::InvalidNumber { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::VariableRedefinition { span, .. }
            | Self::UndefinedVariable { span, .. } => Some(span),
            _ => None,
        }
    }
}

impl Display for TinycError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "source text is empty"),
            Self::InvalidNumber { text, .. } => {
                write!(f, "number literal {text} does not fit in a 32-bit integer")
            }
            Self::UnexpectedToken {
                expected,
                actual,
                actual_text,
                ..
            } => write!(
                f,
                "unexpected token '{actual_text}' ({actual}), expected {expected}"
            ),
            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            Self::VariableRedefinition { name, .. } => {
                write!(f, "variable '{name}' is already defined")
            }
            Self::UndefinedVariable { name, .. } => {
                write!(f, "usage of undefined variable '{name}'")
            }
            Self::UnsupportedReturnType { found } => {
                write!(f, "unsupported return type '{found}', only 'int' is supported")
            }
            Self::Fmt(err) => write!(f, "{}", err),
        }
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Statement => write!(f, "a statement"),
            Self::Expression => write!(f, "an expression"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl std::error::Error for TinycError {}

impl From<fmt::Error> for TinycError {
    fn from(err: fmt::Error) -> Self {
        TinycError::Fmt(err)
    }
}
