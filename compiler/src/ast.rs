//! The parse tree: atoms and parenthesized forms.
//!
//! An `Expr` is exactly what the parser produces: it carries no resolved
//! slots or type information. All of that is the codegen pass's job.

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(i32),
    Float(f64),
    Bool(bool),
    String(String),
    Symbol(String),
    /// A parenthesized form, including the empty list `()`.
    List(Vec<Expr>),
}

/// A source file is a sequence of top-level expressions.
pub type Program = Vec<Expr>;
