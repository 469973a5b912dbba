//! Canonical query rendering for parsed Classic keyword trees.
//!
//! Rendering follows a few rules, applied in one pure recursive walk:
//!
//! - Adjacent siblings with no written operator are joined with `OR`.
//! - Newlines erase that implicit `OR`: when the input as a whole, or a
//!   clause's own children, contain a newline separator, adjacent siblings
//!   join with a plain space instead. A newline buried in a nested clause
//!   does not leak out to its parent. Written operators, newlines included,
//!   always render.
//! - A clause that renders more than one element is parenthesized; a clause
//!   wrapping a single element disappears, so `((one two))` comes out as
//!   `(one OR two)`.
//! - A lone prefix marker fuses with the term that follows it: `+ EUV`
//!   renders as `+EUV`.
//!
//! The walk never mutates the tree and never drops a term.

use thiserror::Error;

use crate::ast::{Node, ParseTree, Term};

/// Invariant violations while walking a parse tree.
///
/// Trees built by the parser always render; these only surface for
/// hand-built trees.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("Empty clause in parse tree")]
    EmptyClause,
}

pub(crate) fn render_tree(tree: &ParseTree) -> Result<String, StructuralError> {
    if tree.children.is_empty() {
        return Err(StructuralError::EmptyClause);
    }
    let top_has_break = has_line_break(&tree.children);
    // the top level is never parenthesized, whatever it holds
    let (body, _) = render_sequence(&tree.children, top_has_break, top_has_break)?;
    Ok(body)
}

fn has_line_break(children: &[Node]) -> bool {
    children.iter().any(Node::is_line_break)
}

/// Render one clause, parenthesizing when more than one element remains.
///
/// Implicit `OR` is erased when this clause or the top level carries a
/// newline separator; `top_has_break` threads the top-level half of that
/// decision through the recursion.
fn render_clause(children: &[Node], top_has_break: bool) -> Result<String, StructuralError> {
    if children.is_empty() {
        return Err(StructuralError::EmptyClause);
    }
    let erase = top_has_break || has_line_break(children);
    let (body, elements) = render_sequence(children, top_has_break, erase)?;
    if elements > 1 {
        Ok(format!("({})", body))
    } else {
        Ok(body)
    }
}

/// What the previous sibling contributed, which decides the separator.
#[derive(Clone, Copy, PartialEq)]
enum Prev {
    Start,
    Element,
    Operator,
    Marker,
}

fn render_sequence(
    children: &[Node],
    top_has_break: bool,
    erase_implicit_or: bool,
) -> Result<(String, usize), StructuralError> {
    let mut out = String::new();
    let mut elements = 0;
    let mut prev = Prev::Start;

    for child in children {
        match child {
            Node::Op(op) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(op.as_str());
                prev = Prev::Operator;
            }
            Node::Term(Term::Marker(marker)) => {
                push_separator(&mut out, prev, erase_implicit_or);
                out.push(*marker);
                if prev != Prev::Marker {
                    elements += 1;
                }
                prev = Prev::Marker;
            }
            Node::Term(term) => {
                push_separator(&mut out, prev, erase_implicit_or);
                out.push_str(&term.text());
                if prev != Prev::Marker {
                    elements += 1;
                }
                prev = Prev::Element;
            }
            Node::Clause(inner) => {
                let piece = render_clause(inner, top_has_break)?;
                push_separator(&mut out, prev, erase_implicit_or);
                out.push_str(&piece);
                if prev != Prev::Marker {
                    elements += 1;
                }
                prev = Prev::Element;
            }
        }
    }

    Ok((out, elements))
}

fn push_separator(out: &mut String, prev: Prev, erase_implicit_or: bool) {
    match prev {
        // markers fuse with whatever follows them
        Prev::Start | Prev::Marker => {}
        Prev::Operator => out.push(' '),
        Prev::Element => out.push_str(if erase_implicit_or { " " } else { " OR " }),
    }
}
