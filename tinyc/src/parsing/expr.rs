//! Expressions.
use super::{Ident, Literal, Parse};
use crate::{
    error::{Expected, TinycError, TinycResult},
    token_stream::TokenStream,
    tokens::{Token, TokenKind},
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Read the value of a variable.
    Variable(Ident),
    Constant(Literal),
    Binary(BinaryExpr),
}

/// Binary operation on two sub-expressions.
///
/// Chains are right-leaning: `a + b + c` is `a + (b + c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub operator: Token,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
        }
    }
}

impl Parse for Expr {
    type Output = Self;
    type Err = TinycError;

    /// `expr := simple ('+' expr)?`
    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        let lhs = Expr::parse_simple(input)?;

        match input.match_token(TokenKind::Plus) {
            Some(operator) => {
                // Recursing on the right hand side makes the operator right-associative.
                let rhs = Expr::parse(input)?;
                Ok(Expr::Binary(BinaryExpr {
                    op: BinOp::Add,
                    operator,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                }))
            }
            None => Ok(lhs),
        }
    }
}

impl Expr {
    /// `simple := NAME | INT_LITERAL`
    fn parse_simple(input: &mut TokenStream) -> TinycResult<Self> {
        let token = input.expect(Expected::Expression, |kind| {
            matches!(kind, TokenKind::Ident | TokenKind::Number)
        })?;

        match token.kind {
            TokenKind::Ident => Ok(Expr::Variable(Ident::from_token(token))),
            _ => Ok(Expr::Constant(Literal::from_token(token))),
        }
    }
}
