//! Bytecode generation.
mod bytecode;
mod codegen;
mod symbol;
mod tape;

pub use self::{
    bytecode::{Bytecode, Op},
    codegen::{CodeGen, Program},
    symbol::SymbolTable,
    tape::{Instr, Instructions, Tape},
};

use crate::{error::TinycResult, parsing::FuncDef};

/// Compile a parsed function into a bytecode program.
#[inline]
pub fn compile(func: &FuncDef) -> TinycResult<Program> {
    CodeGen::new().compile(func)
}
