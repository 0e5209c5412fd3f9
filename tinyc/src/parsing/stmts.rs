//! Statement parsing.
use super::{end_of_input, expr::Expr, Ident, Parse};
use crate::{
    error::{Expected, TinycError, TinycResult},
    token_stream::{unexpected, TokenStream},
    tokens::{Keyword, Token, TokenKind},
    types::ValueType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Variable definition
    Def(VarDef),
    Assign(Assign),
    Return(Return),
}

/// Definition of a variable, with an optional initial value.
///
/// # Example
///
/// ```text
/// int foo = 1;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDef {
    pub keyword: Token,
    pub name: Ident,
    pub ty: ValueType,
    pub rhs: Option<Expr>,
}

/// Assignment of a new value to an existing variable.
///
/// # Example
///
/// ```text
/// foo = foo + 1;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    pub name: Ident,
    pub eq: Token,
    pub rhs: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    pub keyword: Token,
    pub rhs: Expr,
}

impl Parse for Stmt {
    type Output = Self;
    type Err = TinycError;

    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        use Keyword as K;
        use TokenKind as T;

        let stmt = match input.peek_kind() {
            Some(T::Keyword(K::Int)) => VarDef::parse(input).map(Stmt::Def)?,
            Some(T::Ident) => Assign::parse(input).map(Stmt::Assign)?,
            Some(T::Keyword(K::Return)) => Return::parse(input).map(Stmt::Return)?,
            _ => {
                return Err(match input.peek() {
                    Some(token) => unexpected(Expected::Statement, token),
                    None => end_of_input(Expected::Statement),
                })
            }
        };

        // Statement must be terminated with a semicolon.
        input.consume(T::Semicolon)?;

        Ok(stmt)
    }
}

impl Parse for VarDef {
    type Output = Self;
    type Err = TinycError;

    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        let keyword = input.consume(TokenKind::Keyword(Keyword::Int))?;
        let name = Ident::parse(input)?;

        let rhs = match input.match_token(TokenKind::Eq) {
            Some(_) => Some(Expr::parse(input)?),
            None => None,
        };

        Ok(Self {
            keyword,
            name,
            ty: ValueType::Int,
            rhs,
        })
    }
}

impl Parse for Assign {
    type Output = Self;
    type Err = TinycError;

    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        let name = Ident::parse(input)?;
        let eq = input.consume(TokenKind::Eq)?;
        let rhs = Expr::parse(input)?;

        Ok(Self { name, eq, rhs })
    }
}

impl Parse for Return {
    type Output = Self;
    type Err = TinycError;

    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        let keyword = input.consume(TokenKind::Keyword(Keyword::Return))?;
        let rhs = Expr::parse(input)?;

        Ok(Self { keyword, rhs })
    }
}
