pub mod collections;
pub mod compile;
pub mod disasm;
pub mod error;
pub mod lex;
pub mod native;
pub mod parsing;
pub mod token_stream;
pub mod tokens;
pub mod types;

pub use self::error::{Expected, TinycError, TinycResult};

pub const IMPL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the whole pipeline over the source text of one function.
pub fn compile_str(source: &str) -> TinycResult<compile::Program> {
    // Lexical analysis
    let tokens = lex::tokenize(source)?;

    // Syntactic analysis
    let tree = parsing::parse(tokens)?;

    // Code generation
    compile::compile(&tree)
}

pub mod prelude {
    pub use super::{
        collections::{DynArray, OffsetMap},
        compile::{compile, Bytecode, CodeGen, Instr, Op, Program, SymbolTable, Tape},
        compile_str,
        disasm::Disassembler,
        error::{Expected, TinycError, TinycResult},
        lex::{dump_tokens, tokenize, Lexer},
        native::emit_listing,
        parsing::{dump_ast, parse, Expr, FuncDef, Stmt},
        tokens::{Keyword, Span, Token, TokenKind},
        types::ValueType,
    };
}
