//! Syntactic analysis
mod block;
mod expr;
mod func;
mod ident;
mod literal;
mod printer;
mod stmts;
mod ty;
mod visitor;

pub use self::{block::*, expr::*, func::*, ident::*, literal::*, printer::*, stmts::*, visitor::*};

use crate::{
    collections::DynArray,
    error::{Expected, TinycError, TinycResult},
    token_stream::{unexpected, TokenStream},
    tokens::Token,
};
use std::error::Error;

pub trait Parse: Sized {
    type Output;
    type Err: Error;

    fn parse(input: &mut TokenStream) -> Result<Self::Output, Self::Err>;
}

/// Parse the whole token sequence into a single function definition.
///
/// The sequence must hold exactly one function. Tokens remaining after
/// the function's closing brace are an error.
pub fn parse(tokens: DynArray<Token>) -> TinycResult<FuncDef> {
    let mut input = TokenStream::new(tokens);
    let func = FuncDef::parse(&mut input)?;

    if let Some(token) = input.peek() {
        return Err(unexpected(Expected::EndOfInput, token));
    }

    log::debug!(
        "parsed function '{}' with {} statements",
        func.ident.name,
        func.body.block.stmts.len()
    );
    Ok(func)
}

/// Shorthand for the error of a required token that never came.
#[inline]
fn end_of_input(expected: Expected) -> TinycError {
    TinycError::UnexpectedEndOfInput { expected }
}
