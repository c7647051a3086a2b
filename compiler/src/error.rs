//! The top-level driver error: wraps whichever phase failed and carries the
//! phase tag the CLI prints ("Lexer error", "Parser error", "Codegen
//! error", "Runtime error").

use std::fmt;
use std::io;

use sx_runtime::RuntimeError;

use crate::codegen::CompileError;
use crate::lexer::LexError;
use crate::parser::ParseError;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Lex(LexError),
    Parse(ParseError),
    Compile(CompileError),
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Lex(e) => write!(f, "Lexer error: {e}"),
            Error::Parse(e) => write!(f, "Parser error: {e}"),
            Error::Compile(e) => write!(f, "Codegen error: {e}"),
            Error::Runtime(e) => write!(f, "Runtime error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<CompileError> for Error {
    fn from(e: CompileError) -> Self {
        Error::Compile(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Error::Runtime(e)
    }
}
