//! Parser for the Classic keyword syntax.
//!
//! Classic keyword lists are line-oriented: each CRLF-separated entry is a
//! keyword expression, adjacency means union, and `+`/`-`/`=` markers carry
//! per-term hints. The grammar:
//!
//! ```text
//! start    := list EOF
//! list     := run (operator run)*
//! operator := "AND NOT" | "AND" | "OR" | "NOT" | "," | newline
//! run      := unit+
//! unit     := "(" list ")" | term
//! term     := quoted phrase | prefix marker | bare word
//! ```
//!
//! Operator keywords are case-insensitive. Commas separate like `OR`.
//! Newlines are significant separators between entries; runs of blank lines
//! collapse to one separator and leading/trailing ones are dropped. A bare
//! word is a maximal run of characters other than whitespace, parentheses,
//! commas, and double quotes. Double quotes always open a phrase; single
//! quotes only do so at the start of a term, so `green's` stays one word.

use thiserror::Error;

use crate::ast::{Node, Operator, ParseTree, Term};

/// Errors raised while parsing Classic keyword input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unbalanced parentheses")]
    UnbalancedParens,
    #[error("Unterminated quoted phrase: {0}")]
    UnterminatedPhrase(String),
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Empty query")]
    EmptyQuery,
}

/// Parse a Classic keyword string into a tree.
///
/// Fails rather than guessing: unbalanced parentheses, unterminated
/// phrases, and misplaced operators are all reported as errors so that no
/// term is ever silently dropped.
pub fn parse(input: &str) -> Result<ParseTree, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyQuery);
    }
    let mut pos = 0;
    let children = parse_list(&tokens, &mut pos)?;
    if pos < tokens.len() {
        // parse_list only stops early on a ')' it has no opener for
        return Err(ParseError::UnbalancedParens);
    }
    Ok(ParseTree::new(children))
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Phrase(String),
    Marker(char),
    Open,
    Close,
    Op(Operator),
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Word(w) => w.clone(),
            Token::Phrase(p) => p.clone(),
            Token::Marker(m) => m.to_string(),
            Token::Open => "(".to_string(),
            Token::Close => ")".to_string(),
            Token::Op(Operator::LineBreak) => "end of line".to_string(),
            Token::Op(op) => op.as_str().to_string(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    !matches!(c, ' ' | '\t' | '\r' | '\n' | '(' | ')' | ',' | '"')
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\r' => i += 1,
            '\n' => {
                // significant separator; runs collapse and leading ones drop
                if !tokens.is_empty() && !matches!(tokens.last(), Some(Token::Op(Operator::LineBreak))) {
                    tokens.push(Token::Op(Operator::LineBreak));
                }
                i += 1;
            }
            '(' => {
                tokens.push(Token::Open);
                i += 1;
            }
            ')' => {
                tokens.push(Token::Close);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Op(Operator::Or));
                i += 1;
            }
            '"' | '\'' => {
                let (text, next) = lex_quoted(&chars, i, c)?;
                tokens.push(Token::Phrase(text));
                i = next;
            }
            '+' | '-' | '=' => match chars.get(i + 1) {
                // a marker glued to a phrase stays inside the phrase token
                Some(&quote) if (quote == '"' || quote == '\'') && c != '=' => {
                    let (text, next) = lex_quoted(&chars, i + 1, quote)?;
                    tokens.push(Token::Phrase(format!("{}{}", c, text)));
                    i = next;
                }
                Some(&next_char) if is_word_char(next_char) => {
                    let (word, next) = lex_word(&chars, i);
                    tokens.push(Token::Word(word));
                    i = next;
                }
                _ => {
                    tokens.push(Token::Marker(c));
                    i += 1;
                }
            },
            _ => {
                let (word, next) = lex_word(&chars, i);
                tokens.push(classify_word(word));
                i = next;
            }
        }
    }

    let mut tokens = merge_and_not(tokens);
    while matches!(tokens.last(), Some(Token::Op(Operator::LineBreak))) {
        tokens.pop();
    }
    Ok(tokens)
}

/// Lex a quoted phrase starting at `open`. The returned text keeps its
/// quotes. Classic input has no escape sequences.
fn lex_quoted(chars: &[char], open: usize, quote: char) -> Result<(String, usize), ParseError> {
    let mut j = open + 1;
    while j < chars.len() {
        if chars[j] == quote {
            let text: String = chars[open..=j].iter().collect();
            return Ok((text, j + 1));
        }
        j += 1;
    }
    let tail: String = chars[open..].iter().collect();
    Err(ParseError::UnterminatedPhrase(tail))
}

fn lex_word(chars: &[char], start: usize) -> (String, usize) {
    let mut j = start;
    while j < chars.len() && is_word_char(chars[j]) {
        j += 1;
    }
    (chars[start..j].iter().collect(), j)
}

fn classify_word(word: String) -> Token {
    if word.eq_ignore_ascii_case("and") {
        Token::Op(Operator::And)
    } else if word.eq_ignore_ascii_case("or") {
        Token::Op(Operator::Or)
    } else if word.eq_ignore_ascii_case("not") {
        Token::Op(Operator::Not)
    } else {
        Token::Word(word)
    }
}

/// Fuse adjacent AND NOT keyword pairs into a single operator token.
fn merge_and_not(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if matches!(merged.last(), Some(Token::Op(Operator::And)))
            && matches!(token, Token::Op(Operator::Not))
        {
            merged.pop();
            merged.push(Token::Op(Operator::AndNot));
        } else {
            merged.push(token);
        }
    }
    merged
}

/// list := run (operator run)*
///
/// A run of a single unit is inlined; longer runs become a clause so the
/// compiler can see which siblings were merely adjacent.
fn parse_list(tokens: &[Token], pos: &mut usize) -> Result<Vec<Node>, ParseError> {
    let mut items: Vec<Node> = Vec::new();
    loop {
        let mut run = parse_run(tokens, pos)?;
        if run.len() == 1 {
            items.extend(run.drain(..));
        } else {
            items.push(Node::Clause(run));
        }
        match tokens.get(*pos) {
            Some(Token::Op(op)) => {
                items.push(Node::Op(*op));
                *pos += 1;
            }
            _ => break,
        }
    }
    Ok(items)
}

/// run := unit+
fn parse_run(tokens: &[Token], pos: &mut usize) -> Result<Vec<Node>, ParseError> {
    let mut units: Vec<Node> = Vec::new();
    loop {
        match tokens.get(*pos) {
            Some(Token::Open) => {
                *pos += 1;
                let inner = parse_list(tokens, pos)?;
                match tokens.get(*pos) {
                    Some(Token::Close) => *pos += 1,
                    _ => return Err(ParseError::UnbalancedParens),
                }
                units.push(Node::Clause(inner));
            }
            Some(Token::Word(word)) => {
                units.push(Node::Term(Term::Word(word.clone())));
                *pos += 1;
            }
            Some(Token::Phrase(phrase)) => {
                units.push(Node::Term(Term::Phrase(phrase.clone())));
                *pos += 1;
            }
            Some(Token::Marker(marker)) => {
                units.push(Node::Term(Term::Marker(*marker)));
                *pos += 1;
            }
            _ => break,
        }
    }
    if units.is_empty() {
        return match tokens.get(*pos) {
            None => Err(ParseError::UnexpectedEnd),
            Some(token) => Err(ParseError::UnexpectedToken(token.describe())),
        };
    }
    Ok(units)
}
