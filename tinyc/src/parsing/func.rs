use super::{block::Block, ident::Ident, Parse};
use crate::{
    error::{TinycError, TinycResult},
    token_stream::TokenStream,
    tokens::{Token, TokenKind},
    types::ValueType,
};

/// Function definition.
///
/// # Example
///
/// ```text
/// int main() {
///     int x = 2 + 3;
///     return x;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDef {
    pub return_type: ValueType,
    pub ident: Ident,
    pub left_paren: Token,
    pub right_paren: Token,
    pub body: FuncBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncBody {
    pub left_brace: Token,
    pub block: Block,
    pub right_brace: Token,
}

impl Parse for FuncDef {
    type Output = Self;
    type Err = TinycError;

    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        let return_type = ValueType::parse(input)?;
        let ident = Ident::parse(input)?;
        let left_paren = input.consume(TokenKind::LeftParen)?;
        let right_paren = input.consume(TokenKind::RightParen)?;
        let body = FuncBody::parse(input)?;

        Ok(Self {
            return_type,
            ident,
            left_paren,
            right_paren,
            body,
        })
    }
}

impl Parse for FuncBody {
    type Output = Self;
    type Err = TinycError;

    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        let left_brace = input.consume(TokenKind::LeftBrace)?;
        let block = Block::parse(input)?;
        let right_brace = input.consume(TokenKind::RightBrace)?;

        Ok(FuncBody {
            left_brace,
            block,
            right_brace,
        })
    }
}
