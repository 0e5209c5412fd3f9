use super::{
    block::Block,
    expr::Expr,
    func::FuncDef,
    stmts::{Assign, Return, Stmt, VarDef},
};

pub trait AstVisitor {
    type Output;
    fn func_def(&mut self, func: &FuncDef) -> Self::Output;
    fn block(&mut self, block: &Block) -> Self::Output;
    fn var_def(&mut self, stmt: &VarDef) -> Self::Output;
    fn assign(&mut self, stmt: &Assign) -> Self::Output;
    fn ret(&mut self, stmt: &Return) -> Self::Output;
    fn expr(&mut self, expr: &Expr) -> Self::Output;

    #[inline]
    fn stmt(&mut self, stmt: &Stmt) -> Self::Output {
        match stmt {
            Stmt::Def(stmt) => self.var_def(stmt),
            Stmt::Assign(stmt) => self.assign(stmt),
            Stmt::Return(stmt) => self.ret(stmt),
        }
    }
}
