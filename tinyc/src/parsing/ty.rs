//! Type annotations.
use super::Parse;
use crate::{
    error::{TinycError, TinycResult},
    token_stream::TokenStream,
    tokens::{Keyword, TokenKind},
    types::ValueType,
};

/// `int` is the only type that can be written in source.
impl Parse for ValueType {
    type Output = Self;
    type Err = TinycError;

    #[inline]
    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        input.consume(TokenKind::Keyword(Keyword::Int))?;
        Ok(ValueType::Int)
    }
}
