//! Entrypoint for CLI
mod error;

use std::{fs, path::PathBuf};

use clap::Parser;
use log::{error, info};
use tinyc::{prelude::*, IMPL_VERSION};

use crate::error::AppError;

#[derive(Parser)]
#[command(
    name = "tinyc",
    about = "Compiles a single function into stack machine bytecode",
    version = IMPL_VERSION
)]
struct Cli {
    /// Source file to compile
    file: PathBuf,

    /// Print the token table
    #[arg(short = 't', long = "tokens")]
    tokens: bool,

    /// Print the syntax tree
    #[arg(short = 'a', long = "ast")]
    ast: bool,

    /// Print the native assembly listing
    #[arg(short = 'S', long = "asm")]
    asm: bool,

    /// Don't print the bytecode listing
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        error!("{err}");
        // FreeBSD EX_DATAERR (65)
        std::process::exit(65)
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    info!("compiling {}", cli.file.display());
    let source_code = fs::read_to_string(&cli.file)?;

    match compile_file(cli, &source_code) {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("{}", render_diagnostic(&cli.file, &source_code, &err));
            Err(err.into())
        }
    }
}

fn compile_file(cli: &Cli, source_code: &str) -> TinycResult<()> {
    let tokens = tokenize(source_code)?;
    if cli.tokens {
        let mut buf = String::new();
        dump_tokens(&mut buf, &tokens, source_code)?;
        print!("{buf}");
    }

    let func = parse(tokens)?;
    if cli.ast {
        let mut buf = String::new();
        dump_ast(&mut buf, &func)?;
        print!("{buf}");
    }

    let program = compile(&func)?;
    if !cli.quiet {
        Disassembler::new(&program).print_bytecode()?;
    }

    if cli.asm {
        for line in emit_listing(&program) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Format the error with the offending source line and a caret under the span.
fn render_diagnostic(path: &std::path::Path, source_code: &str, err: &TinycError) -> String {
    let span = match err.span() {
        Some(span) => span,
        None => return format!("error: {err}"),
    };

    let (line_text, line_span) = span.surrounding_line(source_code);
    let (line, column) = span.line_column(source_code);
    let padding = " ".repeat((span.index - line_span.index) as usize);
    let underline = "^".repeat(usize::max(span.size as usize, 1));

    format!(
        "error: {err}\n  --> {}:{line}:{column}\n   |\n   | {line_text}\n   | {padding}{underline}",
        path.display()
    )
}
