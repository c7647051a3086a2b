//! `sxc`: lexer, parser, AST, symbol table and codegen for the `sx`
//! S-expression interpreter, plus the file-to-stdout driver the `interp`
//! binary wraps.

pub mod ast;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod symtab;

use std::fs;
use std::path::Path;

pub use codegen::{CompileError, CompiledProgram, Compiler};
pub use error::Error;
pub use lexer::{lex, LexError, Token};
pub use parser::{parse, ParseError};
pub use symtab::SymbolTable;

/// Read, compile and run a source file end to end: read the whole file,
/// build lexer -> parser -> compiler -> VM, run, and let resource teardown
/// happen by falling out of scope.
pub fn run_file(path: &Path) -> Result<(), Error> {
    let source = fs::read_to_string(path)?;
    let tokens = lex(&source)?;
    let program = parse(&tokens)?;
    let compiled = Compiler::new().compile(&program)?;

    let mut vm = sx_runtime::Vm::with_string_literals(compiled.instructions, compiled.string_literals);
    vm.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn run_source(src: &str) -> Result<(), Error> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(src.as_bytes()).unwrap();
        run_file(file.path())
    }

    #[test]
    fn runs_a_simple_source_file() {
        assert!(run_source("(println (+ 1 2))").is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = run_file(Path::new("/nonexistent/path/does-not-exist.sx"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn lex_error_propagates_as_lex_variant() {
        assert!(matches!(run_source("1.2.3"), Err(Error::Lex(_))));
    }

    #[test]
    fn parse_error_propagates_as_parse_variant() {
        assert!(matches!(run_source(")"), Err(Error::Parse(_))));
    }

    #[test]
    fn compile_error_propagates_as_compile_variant() {
        assert!(matches!(run_source("(bogus 1)"), Err(Error::Compile(_))));
    }

    #[test]
    fn runtime_error_propagates_as_runtime_variant() {
        assert!(matches!(run_source("(/ 1 0)"), Err(Error::Runtime(_))));
    }
}
