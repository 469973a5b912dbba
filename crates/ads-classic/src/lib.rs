//! ads-classic: Classic keyword syntax parser and query compiler
//!
//! ADS Classic stored per-user keyword lists in a line-oriented syntax that
//! predates the modern search engine. This crate parses that syntax and
//! compiles it to an equivalent boolean query string:
//!
//! - Entries are separated by CRLF newlines; terms on one line are
//!   implicitly OR'd together
//! - `+`, `-` and `=` prefix markers carry per-term hints and are kept
//!   verbatim, whether attached (`+EUV`) or spaced (`+ EUV`)
//! - Phrases are quoted with `"` or `'` and pass through untouched
//! - `AND`, `OR`, `NOT`, `AND NOT` and `,` separate clauses in any case;
//!   parentheses nest arbitrarily
//!
//! # Examples
//!
//! ```
//! use ads_classic::compile_classic_keywords;
//!
//! assert_eq!(compile_classic_keywords("one two").unwrap(), "(one OR two)");
//! assert_eq!(
//!     compile_classic_keywords("photosphere\r\nchromosphere").unwrap(),
//!     "photosphere OR chromosphere"
//! );
//! assert_eq!(
//!     compile_classic_keywords("(foo and bar) or baz").unwrap(),
//!     "(foo AND bar) OR baz"
//! );
//! ```

pub mod ast;
pub mod compile;
pub mod parser;

pub use ast::{Node, Operator, ParseTree, Term};
pub use compile::StructuralError;
pub use parser::{parse, ParseError};

use thiserror::Error;

/// Any failure while turning Classic keyword input into a query string.
#[derive(Debug, Error)]
pub enum ClassicError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] ParseError),
    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),
}

/// Compile a Classic keyword string into a canonical boolean query.
///
/// Parses the input and renders it in one step. Input that cannot be
/// parsed is rejected; nothing is ever silently dropped or rewritten.
pub fn compile_classic_keywords(raw: &str) -> Result<String, ClassicError> {
    let tree = parser::parse(raw)?;
    Ok(tree.compile()?)
}
