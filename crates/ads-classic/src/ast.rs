//! Parse tree for the Classic keyword syntax.
//!
//! A parsed expression is a flat list of nodes at the top level, where
//! clauses (parenthesized groups or runs of adjacent terms) alternate with
//! explicit separators. The tree stays faithful to the input: no terms are
//! dropped, reordered, or rewritten during parsing. All normalization
//! happens later, when the tree is compiled to a query string.

use serde::{Deserialize, Serialize};

/// A node in a Classic keyword parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A parenthesized group, or a run of adjacent terms
    Clause(Vec<Node>),
    /// A single search term
    Term(Term),
    /// An explicit separator between siblings
    Op(Operator),
}

impl Node {
    /// Create a bare word term node.
    pub fn word(text: impl Into<String>) -> Self {
        Node::Term(Term::Word(text.into()))
    }

    /// Create a quoted phrase term node. The text keeps its quotes.
    pub fn phrase(text: impl Into<String>) -> Self {
        Node::Term(Term::Phrase(text.into()))
    }

    /// Create a lone prefix marker node.
    pub fn marker(marker: char) -> Self {
        Node::Term(Term::Marker(marker))
    }

    /// Create a clause node from child nodes.
    pub fn clause(children: Vec<Node>) -> Self {
        Node::Clause(children)
    }

    /// Create an operator node.
    pub fn op(op: Operator) -> Self {
        Node::Op(op)
    }

    /// True for operator nodes.
    pub fn is_operator(&self) -> bool {
        matches!(self, Node::Op(_))
    }

    /// True for the newline separator specifically.
    pub fn is_line_break(&self) -> bool {
        matches!(self, Node::Op(Operator::LineBreak))
    }

    /// True for lone prefix markers, which fuse with the following term.
    pub fn is_marker(&self) -> bool {
        matches!(self, Node::Term(Term::Marker(_)))
    }
}

/// A leaf search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// Maximal run of non-delimiter characters, markers included
    Word(String),
    /// Quoted phrase, quotes (and any leading marker) retained
    Phrase(String),
    /// A prefix marker separated from its term by whitespace
    Marker(char),
}

impl Term {
    /// The rendered text of this term, exactly as it appears in a query.
    pub fn text(&self) -> String {
        match self {
            Term::Word(text) | Term::Phrase(text) => text.clone(),
            Term::Marker(marker) => marker.to_string(),
        }
    }
}

/// Separators recognized between clauses.
///
/// Commas and anything else outside the boolean set are normalized to `Or`
/// during lexing, so the tree only ever holds these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    And,
    Or,
    Not,
    AndNot,
    /// Newline between entries of a line-oriented keyword list
    LineBreak,
}

impl Operator {
    /// Canonical rendering. Newlines read as unions between entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::AndNot => "AND NOT",
            Operator::LineBreak => "OR",
        }
    }
}

/// A complete parsed Classic keyword expression.
///
/// The top-level children behave like a clause that is never parenthesized
/// in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseTree {
    pub children: Vec<Node>,
}

impl ParseTree {
    pub fn new(children: Vec<Node>) -> Self {
        ParseTree { children }
    }

    /// Render this tree as a canonical boolean query string.
    pub fn compile(&self) -> Result<String, crate::compile::StructuralError> {
        crate::compile::render_tree(self)
    }
}
