//! The line-oriented command language driven by the CLI and REPL.

pub mod ast;
mod cursor;
mod parser;
mod scanner;
pub mod token;

pub use scanner::{is_ident_continue, is_ident_start};

use crate::error::SyntaxError;
use ast::Statement;

/// Tokenize and parse a whole script.
pub fn parse(source: &str) -> Result<Vec<Statement>, SyntaxError> {
    let tokens = scanner::Scanner::new(source).scan_tokens()?;
    parser::Parser::new(tokens).parse_script()
}
