//! Human-readable dump of the syntax tree.
use super::{
    block::Block,
    expr::Expr,
    func::FuncDef,
    stmts::{Assign, Return, VarDef},
    visitor::AstVisitor,
};
use std::fmt::{self, Write as FmtWrite};

/// Write an indented outline of the function's syntax tree.
pub fn dump_ast<W: FmtWrite>(w: &mut W, func: &FuncDef) -> fmt::Result {
    AstPrinter::new(w).func_def(func)
}

/// Tree printer. Nesting depth is drawn as a run of dashes.
pub struct AstPrinter<'a, W> {
    w: &'a mut W,
    depth: usize,
}

impl<'a, W: FmtWrite> AstPrinter<'a, W> {
    pub fn new(w: &'a mut W) -> Self {
        Self { w, depth: 0 }
    }

    fn line(&mut self, args: fmt::Arguments) -> fmt::Result {
        if self.depth > 0 {
            write!(self.w, "{} ", "-".repeat(self.depth))?;
        }
        self.w.write_fmt(args)?;
        self.w.write_char('\n')
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> fmt::Result) -> fmt::Result {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

impl<'a, W: FmtWrite> AstVisitor for AstPrinter<'a, W> {
    type Output = fmt::Result;

    fn func_def(&mut self, func: &FuncDef) -> fmt::Result {
        self.line(format_args!("Function {} -> {}", func.ident.name, func.return_type))?;
        self.nested(|p| p.block(&func.body.block))
    }

    fn block(&mut self, block: &Block) -> fmt::Result {
        for stmt in &block.stmts {
            self.stmt(stmt)?;
        }
        Ok(())
    }

    fn var_def(&mut self, stmt: &VarDef) -> fmt::Result {
        self.line(format_args!("Definition {}: {}", stmt.name.name, stmt.ty))?;
        match stmt.rhs {
            Some(ref rhs) => self.nested(|p| {
                p.line(format_args!("Initial value"))?;
                p.nested(|p| p.expr(rhs))
            }),
            None => Ok(()),
        }
    }

    fn assign(&mut self, stmt: &Assign) -> fmt::Result {
        self.line(format_args!("Assignment {}", stmt.name.name))?;
        self.nested(|p| p.expr(&stmt.rhs))
    }

    fn ret(&mut self, stmt: &Return) -> fmt::Result {
        self.line(format_args!("Return"))?;
        self.nested(|p| p.expr(&stmt.rhs))
    }

    fn expr(&mut self, expr: &Expr) -> fmt::Result {
        match expr {
            Expr::Variable(ident) => self.line(format_args!("Variable {}", ident.name)),
            Expr::Constant(literal) => self.line(format_args!("Constant {}", literal.value)),
            Expr::Binary(binary) => {
                self.line(format_args!("Binary {}", binary.op))?;
                self.nested(|p| {
                    p.line(format_args!("Left"))?;
                    p.nested(|p| p.expr(&binary.lhs))?;
                    p.line(format_args!("Right"))?;
                    p.nested(|p| p.expr(&binary.rhs))
                })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{lex::tokenize, parsing::parse};

    #[test]
    fn test_dump_ast() {
        let func = parse(tokenize("int main() { int x = 1 + y; return x; }").unwrap()).unwrap();
        let mut buf = String::new();
        dump_ast(&mut buf, &func).unwrap();

        let expected = concat!(
            "Function main -> int\n",
            "- Definition x: int\n",
            "-- Initial value\n",
            "--- Binary +\n",
            "---- Left\n",
            "----- Constant 1\n",
            "---- Right\n",
            "----- Variable y\n",
            "- Return\n",
            "-- Variable x\n",
        );
        assert_eq!(buf, expected);
    }
}
