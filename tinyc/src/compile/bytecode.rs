//! Stack machine instruction set.
use std::fmt;

/// Operation codes of the stack machine.
///
/// Binary operations consume the two topmost stack values and
/// push the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Op {
    // ------------------------------------------------------------------------
    // Data movement
    /// Push the immediate operand.
    Push,
    /// Discard the top of the stack.
    Pop,
    /// Push the value stored at the frame offset given as immediate.
    Load,
    /// Pop the top of the stack into the frame offset given as immediate.
    Store,

    // ------------------------------------------------------------------------
    // Data transformation
    /// Logical negation of the top of the stack.
    Not,
    Add,
    Sub,
    Mul,
    Div,
    /// Remainder of the first operand divided by the second.
    Rem,
    LShift,
    RShift,

    // ------------------------------------------------------------------------
    // Flow
    Call,
    Ret,
}

impl Op {
    /// Operations followed by an immediate operand on the tape.
    #[inline]
    pub fn is_double_width(&self) -> bool {
        matches!(self, Op::Push | Op::Load | Op::Store)
    }

    /// Number of tape units the instruction occupies.
    #[inline]
    pub fn width(&self) -> usize {
        if self.is_double_width() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for Op {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Op::Push   => write!(f, "PUSH"),
            Op::Pop    => write!(f, "POP"),
            Op::Load   => write!(f, "LOAD"),
            Op::Store  => write!(f, "STORE"),
            Op::Not    => write!(f, "NOT"),
            Op::Add    => write!(f, "ADD"),
            Op::Sub    => write!(f, "SUB"),
            Op::Mul    => write!(f, "MUL"),
            Op::Div    => write!(f, "DIV"),
            Op::Rem    => write!(f, "REM"),
            Op::LShift => write!(f, "LSHIFT"),
            Op::RShift => write!(f, "RSHIFT"),
            Op::Call   => write!(f, "CALL"),
            Op::Ret    => write!(f, "RET"),
        }
    }
}

/// A single unit on the instruction tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bytecode {
    Op(Op),
    /// Immediate operand of the preceding double width operation.
    Value(i32),
}

impl From<Op> for Bytecode {
    #[inline]
    fn from(op: Op) -> Self {
        Bytecode::Op(op)
    }
}

impl From<i32> for Bytecode {
    #[inline]
    fn from(value: i32) -> Self {
        Bytecode::Value(value)
    }
}

impl fmt::Display for Bytecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bytecode::Op(op) => write!(f, "{op}"),
            Bytecode::Value(value) => write!(f, "{value}"),
        }
    }
}
