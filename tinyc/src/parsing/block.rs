use super::{end_of_input, stmts::Stmt, Parse};
use crate::{
    error::{Expected, TinycError, TinycResult},
    token_stream::TokenStream,
    tokens::TokenKind,
};

/// Ordered statements of a function body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Parse for Block {
    type Output = Self;
    type Err = TinycError;

    /// Parse statements up to, but not including, the closing brace.
    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        let mut stmts = vec![];

        loop {
            match input.peek_kind() {
                Some(TokenKind::RightBrace) => break,
                Some(_) => stmts.push(Stmt::parse(input)?),
                None => return Err(end_of_input(Expected::Token(TokenKind::RightBrace))),
            }
        }

        Ok(Self { stmts })
    }
}
