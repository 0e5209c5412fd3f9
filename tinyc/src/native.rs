//! Native assembly listing.
//!
//! Only the section skeleton is produced. Lowering the tape to
//! machine instructions is not implemented.
use crate::{collections::DynArray, compile::Program};

/// Build the NASM listing lines for the program.
pub fn emit_listing(program: &Program) -> DynArray<String> {
    let mut lines = DynArray::new();
    lines.push("section .text".to_owned());
    lines.push(format!("global {}", program.name));

    log::warn!(
        "native code generation is not implemented, '{}' has an empty body",
        program.name
    );

    lines.push(String::new());
    lines.push("section .note.GNU-stack noalloc noexec nowrite progbits".to_owned());
    lines
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_listing_skeleton() {
        let program = crate::compile_str("int start() { return 0; }").unwrap();
        let lines = emit_listing(&program);

        assert_eq!(lines.first().map(String::as_str), Some("section .text"));
        assert_eq!(lines[1], "global start");
        assert!(lines.last().unwrap().starts_with("section .note.GNU-stack"));
    }
}
