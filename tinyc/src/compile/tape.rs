//! Instruction tape.
use super::bytecode::{Bytecode, Op};
use crate::collections::DynArray;

/// Flat sequence of operations and immediates.
///
/// Double width operations are always directly followed by
/// their immediate value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    code: DynArray<Bytecode>,
}

/// Decoded instruction, pairing an operation with its immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instr {
    /// Position of the operation on the tape.
    pub offset: usize,
    pub op: Op,
    pub operand: Option<i32>,
}

impl Tape {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw packed units.
    #[inline]
    pub fn units(&self) -> &[Bytecode] {
        &self.code
    }

    /// Number of units on the tape.
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Iterate over the decoded instructions.
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions {
            units: &self.code,
            cursor: 0,
        }
    }

    pub(crate) fn push_op(&mut self, op: Op) {
        debug_assert!(!op.is_double_width(), "{op} requires an operand");
        log::trace!("emit {op}");
        self.code.push(Bytecode::Op(op));
    }

    pub(crate) fn push_op_with(&mut self, op: Op, operand: i32) {
        debug_assert!(op.is_double_width(), "{op} takes no operand");
        log::trace!("emit {op} {operand}");
        self.code.push(Bytecode::Op(op));
        self.code.push(Bytecode::Value(operand));
    }

    pub(crate) fn clear(&mut self) {
        self.code = DynArray::new();
    }
}

/// Iterator decoding a packed tape.
///
/// Stops early if the tape is malformed, which can't happen to
/// tapes built by the code generator.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Instructions<'a> {
    units: &'a [Bytecode],
    cursor: usize,
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Instr;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cursor;
        let op = match self.units.get(offset)? {
            Bytecode::Op(op) => *op,
            Bytecode::Value(_) => return None,
        };

        let operand = if op.is_double_width() {
            match self.units.get(offset + 1)? {
                Bytecode::Value(value) => Some(*value),
                Bytecode::Op(_) => return None,
            }
        } else {
            None
        };

        self.cursor += op.width();
        Some(Instr { offset, op, operand })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_packed_layout() {
        let mut tape = Tape::new();
        tape.push_op_with(Op::Push, 2);
        tape.push_op_with(Op::Push, 3);
        tape.push_op(Op::Add);
        tape.push_op_with(Op::Store, 0);

        assert_eq!(tape.len(), 7);
        assert_eq!(
            tape.units(),
            &[
                Bytecode::Op(Op::Push),
                Bytecode::Value(2),
                Bytecode::Op(Op::Push),
                Bytecode::Value(3),
                Bytecode::Op(Op::Add),
                Bytecode::Op(Op::Store),
                Bytecode::Value(0),
            ]
        );
    }

    #[test]
    fn test_instructions() {
        let mut tape = Tape::new();
        tape.push_op_with(Op::Load, 4);
        tape.push_op(Op::Ret);

        let instrs: Vec<Instr> = tape.instructions().collect();
        assert_eq!(
            instrs,
            vec![
                Instr { offset: 0, op: Op::Load, operand: Some(4) },
                Instr { offset: 2, op: Op::Ret, operand: None },
            ]
        );
    }

    #[test]
    fn test_double_width() {
        assert!(Op::Push.is_double_width());
        assert!(Op::Load.is_double_width());
        assert!(Op::Store.is_double_width());
        assert!(!Op::Add.is_double_width());
        assert!(!Op::Call.is_double_width());
        assert!(!Op::Ret.is_double_width());
    }
}
