//! Runtime error kinds.
//!
//! Every VM error is terminal: execution stops and the error is reported
//! by the caller with a phase tag ("Runtime error"). There is no recovery
//! path inside the VM itself, so this is a plain enum with a `Display`
//! impl rather than anything that supports retry.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// An opcode's operand(s) did not match the type it requires.
    TypeError(String),
    /// `DIV` with `|divisor| < 1e-12`, or `MOD` with divisor `0`.
    DivisionByZero(String),
    /// Pop (or equivalent) attempted on an empty stack.
    StackUnderflow(String),
    /// A list/string index or length was out of range.
    IndexOutOfBounds(String),
    /// `FLOAT2INT` on a value outside representable `i32` range.
    ConversionOverflow(String),
    /// A heap or stack growth failed.
    AllocationError(String),
    /// `LOAD_VAR` on a slot that has never been the target of `STORE_VAR`.
    UninitializedGlobal(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeError(msg) => write!(f, "type error: {msg}"),
            RuntimeError::DivisionByZero(msg) => write!(f, "division by zero: {msg}"),
            RuntimeError::StackUnderflow(msg) => write!(f, "stack underflow: {msg}"),
            RuntimeError::IndexOutOfBounds(msg) => write!(f, "index out of bounds: {msg}"),
            RuntimeError::ConversionOverflow(msg) => write!(f, "conversion overflow: {msg}"),
            RuntimeError::AllocationError(msg) => write!(f, "allocation error: {msg}"),
            RuntimeError::UninitializedGlobal(msg) => write!(f, "uninitialized global: {msg}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
