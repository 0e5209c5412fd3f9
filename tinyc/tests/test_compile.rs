use tinyc::{
    compile::{compile, Bytecode, CodeGen, Instr, Op},
    compile_str,
    disasm::Disassembler,
    lex::tokenize,
    parsing::{parse, Block, FuncBody, FuncDef, Ident},
    tokens::{Span, Token, TokenKind},
    types::ValueType,
    TinycError,
};

const SUM: &str = include_str!("sum.tc");
const ASSIGN: &str = include_str!("assign.tc");

fn ops(source: &str) -> Vec<(Op, Option<i32>)> {
    let program = compile_str(source).unwrap();
    program
        .tape
        .instructions()
        .map(|Instr { op, operand, .. }| (op, operand))
        .collect()
}

#[test]
fn test_compile_sum() {
    let program = compile_str(SUM).unwrap();

    let mut listing = String::new();
    Disassembler::new(&program).disassemble(&mut listing).unwrap();
    println!("{listing}");

    assert_eq!(
        ops(SUM),
        vec![
            (Op::Push, Some(1)),
            (Op::Store, Some(0)),
            (Op::Push, Some(2)),
            (Op::Load, Some(0)),
            (Op::Add, None),
            (Op::Store, Some(4)),
            (Op::Load, Some(0)),
            (Op::Load, Some(4)),
            (Op::Push, Some(40)),
            (Op::Add, None),
            (Op::Add, None),
            (Op::Store, Some(8)),
            (Op::Load, Some(8)),
            (Op::Ret, None),
        ]
    );
    assert_eq!(program.frame_size(), 12);
    assert_eq!(program.symbols.variables(), vec![("a", 0), ("b", 4), ("c", 8)]);
}

#[test]
fn test_compile_assign() {
    let program = compile_str(ASSIGN).unwrap();
    assert_eq!(program.name, "counter");
    assert_eq!(program.frame_size(), 4);

    let stores: Vec<_> = program
        .tape
        .instructions()
        .filter(|instr| instr.op == Op::Store)
        .map(|instr| instr.operand)
        .collect();
    assert_eq!(stores, vec![Some(0); 3]);
}

#[test]
fn test_return_constant() {
    for value in [0, 7, i32::MAX] {
        let program = compile_str(&format!("int main() {{ return {value}; }}")).unwrap();
        assert_eq!(
            program.tape.units(),
            &[Bytecode::Op(Op::Push), Bytecode::Value(value), Bytecode::Op(Op::Ret)]
        );
    }
}

#[test]
fn test_end_to_end() {
    let program = compile_str("int main(){ int x = 2 + 3; return x; }").unwrap();
    assert_eq!(
        program.tape.units(),
        &[
            Bytecode::Op(Op::Push),
            Bytecode::Value(2),
            Bytecode::Op(Op::Push),
            Bytecode::Value(3),
            Bytecode::Op(Op::Add),
            Bytecode::Op(Op::Store),
            Bytecode::Value(0),
            Bytecode::Op(Op::Load),
            Bytecode::Value(0),
            Bytecode::Op(Op::Ret),
        ]
    );
}

/// Operands are pushed right to left through the nested additions,
/// so all constants come before any `ADD`.
#[test]
fn test_chained_addition() {
    assert_eq!(
        ops("int main() { return 1 + 2 + 3; }"),
        vec![
            (Op::Push, Some(1)),
            (Op::Push, Some(2)),
            (Op::Push, Some(3)),
            (Op::Add, None),
            (Op::Add, None),
            (Op::Ret, None),
        ]
    );
}

#[test]
fn test_frame_offsets() {
    let program = compile_str("int f() { int a = 0; int b = 0; int c = 0; int d = 0; return d; }").unwrap();
    let stores: Vec<_> = program
        .tape
        .instructions()
        .filter(|instr| instr.op == Op::Store)
        .filter_map(|instr| instr.operand)
        .collect();

    assert_eq!(stores, vec![0, 4, 8, 12]);
    assert_eq!(program.frame_size(), 16);
}

#[test]
fn test_redefinition() {
    let err = compile_str("int main() { int x = 1; int x = 2; return x; }").unwrap_err();
    match err {
        TinycError::VariableRedefinition { name, span } => {
            assert_eq!(name, "x");
            assert_eq!(span.index, 28);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_undefined_variable() {
    let func = parse(tokenize("int main() { int x = 1; return y; }").unwrap()).unwrap();

    let mut codegen = CodeGen::new();
    let err = codegen.compile(&func).unwrap_err();
    assert!(matches!(err, TinycError::UndefinedVariable { ref name, .. } if name == "y"));

    // The generator is left clean and can be reused.
    let func = parse(tokenize("int main() { return 5; }").unwrap()).unwrap();
    let program = codegen.compile(&func).unwrap();
    assert_eq!(program.tape.len(), 3);
    assert!(program.symbols.is_empty());
}

#[test]
fn test_assign_undefined() {
    let err = compile_str("int main() { x = 1; return 0; }").unwrap_err();
    assert!(matches!(err, TinycError::UndefinedVariable { .. }));
}

/// The variable is in scope within its own initializer.
#[test]
fn test_self_referencing_definition() {
    assert_eq!(
        ops("int main() { int x = x; return x; }"),
        vec![
            (Op::Load, Some(0)),
            (Op::Store, Some(0)),
            (Op::Load, Some(0)),
            (Op::Ret, None),
        ]
    );
}

#[test]
fn test_missing_return_compiles() {
    let program = compile_str("int main() { int x = 1; }").unwrap();
    assert_eq!(program.tape.len(), 4);
}

#[test]
fn test_unsupported_return_type() {
    let func = FuncDef {
        return_type: ValueType::Void,
        ident: Ident::new("main", Span::new(5, 4)),
        left_paren: Token::new(TokenKind::LeftParen, Span::new(9, 1)),
        right_paren: Token::new(TokenKind::RightParen, Span::new(10, 1)),
        body: FuncBody {
            left_brace: Token::new(TokenKind::LeftBrace, Span::new(12, 1)),
            block: Block::default(),
            right_brace: Token::new(TokenKind::RightBrace, Span::new(13, 1)),
        },
    };

    assert!(matches!(
        compile(&func),
        Err(TinycError::UnsupportedReturnType {
            found: ValueType::Void
        })
    ));
}
