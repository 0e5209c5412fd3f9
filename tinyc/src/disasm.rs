//! Disassembler.
use std::fmt::{self, Write as FmtWrite};

use crate::compile::{Instr, Program};

pub struct Disassembler<'a> {
    program: &'a Program,
}

impl<'a> Disassembler<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self { program }
    }

    pub fn print_bytecode(&self) -> fmt::Result {
        let mut s = String::new();
        self.disassemble(&mut s)?;
        print!("{}", s);
        Ok(())
    }

    /// Write the whole program to the given writer, one instruction per line.
    pub fn disassemble<W: FmtWrite>(&self, w: &mut W) -> fmt::Result {
        writeln!(w, "{}:", self.program.name)?;
        for instr in self.program.tape.instructions() {
            self.dis_instr(w, &instr)?;
        }
        Ok(())
    }

    fn dis_instr<W: FmtWrite>(&self, w: &mut W, instr: &Instr) -> fmt::Result {
        match instr.operand {
            Some(operand) => writeln!(w, "\t{:04} {} {}", instr.offset, instr.op, operand),
            None => writeln!(w, "\t{:04} {}", instr.offset, instr.op),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_disassemble() {
        let program = crate::compile_str("int main() { int x = 2 + 3; return x; }").unwrap();

        let mut buf = String::new();
        Disassembler::new(&program).disassemble(&mut buf).unwrap();

        let expected = concat!(
            "main:\n",
            "\t0000 PUSH 2\n",
            "\t0002 PUSH 3\n",
            "\t0004 ADD\n",
            "\t0005 STORE 0\n",
            "\t0007 LOAD 0\n",
            "\t0009 RET\n",
        );
        assert_eq!(buf, expected);
    }
}
