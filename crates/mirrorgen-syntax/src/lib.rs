//! Declaration-level parsing for Go source files.
//!
//! This crate extracts the declaration surface of a file — type declarations,
//! methods, and free functions with their signatures — without modeling
//! anything below it:
//! - `token` - logos lexer (string/comment aware, so delimiter skipping is safe)
//! - `ast` - declaration and type-expression shapes
//! - `parser` - recursive-descent declaration parser
//!
//! Function bodies, `const`/`var` initializers, and import blocks are consumed
//! by balanced-delimiter skipping and never appear in the output.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
mod parser;
mod token;

#[cfg(test)]
mod token_tests;

pub use ast::{ChanDir, Decl, FuncDecl, Param, Signature, SourceFile, TypeDecl, TypeExpr};
pub use parser::parse_file;

/// Errors produced while lexing or parsing a source file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("line {line}: unrecognized character")]
    UnknownToken { line: usize },

    #[error("line {line}: unexpected {found}, expected {expected}")]
    Unexpected {
        line: usize,
        found: &'static str,
        expected: &'static str,
    },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: &'static str },
}
