use super::{bytecode::Op, symbol::SymbolTable, tape::Tape};
use crate::{
    error::{TinycError, TinycResult},
    parsing::{Assign, AstVisitor, BinOp, Block, Expr, FuncDef, Return, VarDef},
    types::ValueType,
};
use smol_str::SmolStr;

/// Result of compiling one function.
#[derive(Debug, Clone)]
pub struct Program {
    /// Name of the compiled function.
    pub name: SmolStr,
    pub tape: Tape,
    pub symbols: SymbolTable,
}

impl Program {
    /// Bytes of stack frame the function's variables occupy.
    #[inline]
    pub fn frame_size(&self) -> i32 {
        self.symbols.frame_size()
    }
}

/// Code generator.
///
/// Lowers a function's syntax tree to stack machine code. Every
/// expression leaves exactly one value on top of the stack.
pub struct CodeGen {
    /// Resulting generated code.
    tape: Tape,
    /// Frame layout of the function being compiled.
    symbols: SymbolTable,
}

impl CodeGen {
    #[inline]
    pub fn new() -> Self {
        Self {
            tape: Tape::new(),
            symbols: SymbolTable::new(),
        }
    }

    /// Compile the function, consuming the generator's state.
    ///
    /// On error nothing of the partially generated code is kept.
    pub fn compile(&mut self, func: &FuncDef) -> TinycResult<Program> {
        self.reset();

        if let Err(err) = self.func_def(func) {
            self.reset();
            return Err(err);
        }

        let program = Program {
            name: func.ident.name.clone(),
            tape: std::mem::take(&mut self.tape),
            symbols: std::mem::take(&mut self.symbols),
        };

        log::debug!(
            "compiled '{}' into {} tape units, frame size {}",
            program.name,
            program.tape.len(),
            program.frame_size()
        );
        Ok(program)
    }

    /// Clear the internal state so the code generator can be reused.
    pub fn reset(&mut self) {
        self.tape.clear();
        self.symbols = SymbolTable::new();
    }
}

impl Default for CodeGen {
    #[inline]
    fn default() -> Self {
        CodeGen::new()
    }
}

/// Recursive visitor
impl AstVisitor for CodeGen {
    type Output = TinycResult<()>;

    fn func_def(&mut self, func: &FuncDef) -> TinycResult<()> {
        if func.return_type != ValueType::Int {
            return Err(TinycError::UnsupportedReturnType {
                found: func.return_type,
            });
        }

        self.block(&func.body.block)
    }

    fn block(&mut self, block: &Block) -> TinycResult<()> {
        for stmt in &block.stmts {
            self.stmt(stmt)?;
        }
        Ok(())
    }

    /// The variable is declared before its initial value is evaluated,
    /// so the initializer may already refer to it.
    fn var_def(&mut self, var_def: &VarDef) -> TinycResult<()> {
        let offset = self.symbols.declare(&var_def.name, var_def.ty)?;

        if let Some(ref rhs) = var_def.rhs {
            self.expr(rhs)?;
            self.tape.push_op_with(Op::Store, offset);
        }

        Ok(())
    }

    fn assign(&mut self, assign: &Assign) -> TinycResult<()> {
        let offset = self.symbols.resolve(&assign.name)?;
        self.expr(&assign.rhs)?;
        self.tape.push_op_with(Op::Store, offset);
        Ok(())
    }

    fn ret(&mut self, ret: &Return) -> TinycResult<()> {
        self.expr(&ret.rhs)?;
        self.tape.push_op(Op::Ret);
        Ok(())
    }

    fn expr(&mut self, expr: &Expr) -> TinycResult<()> {
        match expr {
            Expr::Constant(literal) => {
                self.tape.push_op_with(Op::Push, literal.value);
            }
            Expr::Variable(ident) => {
                let offset = self.symbols.resolve(ident)?;
                self.tape.push_op_with(Op::Load, offset);
            }
            Expr::Binary(binary) => {
                // Left operand is pushed first, so it sits below the right operand.
                self.expr(&binary.lhs)?;
                self.expr(&binary.rhs)?;
                match binary.op {
                    BinOp::Add => self.tape.push_op(Op::Add),
                }
            }
        }
        Ok(())
    }
}
