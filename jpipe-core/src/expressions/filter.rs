use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value as JsonValue;

use super::compare::{compare, CompareOp, Literal};
use super::path::{parse_path, resolve, PathError, Segment};
use super::text::is_primitive;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?([eE][+-]?\d+)?$").expect("valid regex"));

/// Parsed filter expression. Binary nodes are left-nested in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Compare {
        field: Field,
        op: CompareOp,
        literal: Literal,
    },
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub raw: String,
    pub segments: Vec<Segment>,
}

impl Field {
    /// `value` on a primitive item is the item itself.
    pub fn resolve<'a>(&self, item: &'a JsonValue) -> Option<&'a JsonValue> {
        if self.raw == "value" && is_primitive(item) {
            return Some(item);
        }
        resolve(item, &self.segments)
    }
}

impl Expr {
    pub fn evaluate(&self, item: &JsonValue) -> bool {
        match self {
            Expr::Compare { field, op, literal } => field
                .resolve(item)
                .is_some_and(|actual| compare(actual, *op, literal)),
            Expr::Not(inner) => !inner.evaluate(item),
            Expr::And(lhs, rhs) => lhs.evaluate(item) && rhs.evaluate(item),
            Expr::Or(lhs, rhs) => lhs.evaluate(item) || rhs.evaluate(item),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Compare { field, op, literal } => write!(f, "{} {op} {literal}", field.raw),
            Expr::Not(inner) => write!(f, "not ({inner})"),
            Expr::And(lhs, rhs) => write!(f, "({lhs} and {rhs})"),
            Expr::Or(lhs, rhs) => write!(f, "({lhs} or {rhs})"),
        }
    }
}

/// Evaluate `filter` against `item`. An empty filter keeps everything; a
/// filter that does not parse keeps nothing.
pub fn evaluate_filter(item: &JsonValue, filter: &str) -> bool {
    match try_evaluate_filter(item, filter) {
        Ok(keep) => keep,
        Err(e) => {
            tracing::debug!(filter, error = %e, "filter did not parse; item rejected");
            false
        }
    }
}

pub fn try_evaluate_filter(item: &JsonValue, filter: &str) -> Result<bool, FilterError> {
    Ok(match parse_filter(filter)? {
        Some(expr) => expr.evaluate(item),
        None => true,
    })
}

/// Parse a filter. `Ok(None)` means the filter is empty.
pub fn parse_filter(input: &str) -> Result<Option<Expr>, FilterError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        binary_ops: 0,
    };
    let expr = parser.parse_expr()?;
    match parser.advance() {
        None => Ok(Some(expr)),
        Some(Token::RParen) => Err(FilterError::UnbalancedParen),
        Some(other) => Err(FilterError::UnexpectedToken {
            expected: "'and' or 'or'",
            found: other.to_string(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Str(String),
    Op(&'static str),
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => write!(f, "'{w}'"),
            Token::Str(s) => write!(f, "string {s:?}"),
            Token::Op(op) => write!(f, "'{op}'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
        }
    }
}

fn is_word_char(ch: char) -> bool {
    !(ch.is_whitespace() || matches!(ch, '\'' | '"' | '(' | ')' | '=' | '!' | '<' | '>'))
}

fn tokenize(input: &str) -> Result<Vec<Token>, FilterError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        match ch {
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '\'' | '"' => {
                chars.next();
                let mut buf = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == ch {
                        closed = true;
                        break;
                    }
                    if c == '\\' {
                        match chars.peek() {
                            Some(&next) if next == ch || next == '\\' => {
                                buf.push(next);
                                chars.next();
                                continue;
                            }
                            _ => {}
                        }
                    }
                    buf.push(c);
                }
                if !closed {
                    return Err(FilterError::UnterminatedString);
                }
                tokens.push(Token::Str(buf));
            }
            '=' | '!' | '<' | '>' => {
                chars.next();
                let followed_by_eq = chars.peek() == Some(&'=');
                let op = match (ch, followed_by_eq) {
                    ('=', true) => "==",
                    ('!', true) => "!=",
                    ('<', true) => "<=",
                    ('>', true) => ">=",
                    ('<', false) => "<",
                    ('>', false) => ">",
                    (other, _) => return Err(FilterError::UnknownOperator(other.to_string())),
                };
                if followed_by_eq {
                    chars.next();
                }
                tokens.push(Token::Op(op));
            }
            _ => {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_word_char(c) {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
        }
    }

    Ok(tokens)
}

const KEYWORDS: [&str; 3] = ["and", "or", "not"];

/// Maximum nesting of `(` and `not`.
pub const MAX_NESTING: usize = 128;
/// Maximum number of `and`/`or` operators in one filter.
pub const MAX_BINARY_OPS: usize = 1024;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    binary_ops: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn enter(&mut self) -> Result<(), FilterError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(FilterError::TooDeep);
        }
        Ok(())
    }

    // No precedence between `and`/`or`: fold strictly left to right.
    fn parse_expr(&mut self) -> Result<Expr, FilterError> {
        let mut lhs = self.parse_term()?;
        loop {
            let combine: fn(Box<Expr>, Box<Expr>) -> Expr = match self.peek() {
                Some(Token::Word(w)) if w == "and" => Expr::And,
                Some(Token::Word(w)) if w == "or" => Expr::Or,
                _ => break,
            };
            self.pos += 1;
            self.binary_ops += 1;
            if self.binary_ops > MAX_BINARY_OPS {
                return Err(FilterError::TooLong);
            }
            let rhs = self.parse_term()?;
            lhs = combine(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, FilterError> {
        match self.peek() {
            Some(Token::Word(w)) if w == "not" => {
                self.pos += 1;
                self.enter()?;
                let inner = self.parse_term()?;
                self.depth -= 1;
                Ok(Expr::Not(Box::new(inner)))
            }
            Some(Token::LParen) => {
                self.pos += 1;
                self.enter()?;
                let inner = self.parse_expr()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    None => Err(FilterError::UnbalancedParen),
                    Some(other) => Err(FilterError::UnexpectedToken {
                        expected: "')'",
                        found: other.to_string(),
                    }),
                }
            }
            _ => self.parse_comparison(),
        }
    }

    fn parse_comparison(&mut self) -> Result<Expr, FilterError> {
        let field = match self.advance() {
            Some(Token::Word(w)) if !KEYWORDS.contains(&w.as_str()) => {
                let segments = parse_path(&w)?;
                Field { raw: w, segments }
            }
            Some(other) => {
                return Err(FilterError::UnexpectedToken {
                    expected: "field",
                    found: other.to_string(),
                })
            }
            None => return Err(FilterError::UnexpectedEnd { expected: "field" }),
        };

        let op = match self.advance() {
            Some(Token::Op(sym)) => CompareOp::from_symbol(sym)
                .ok_or_else(|| FilterError::UnknownOperator(sym.to_string()))?,
            Some(Token::Word(w)) => {
                CompareOp::from_symbol(&w).ok_or(FilterError::UnknownOperator(w))?
            }
            Some(other) => {
                return Err(FilterError::UnexpectedToken {
                    expected: "operator",
                    found: other.to_string(),
                })
            }
            None => return Err(FilterError::UnexpectedEnd { expected: "operator" }),
        };

        let literal = match self.advance() {
            Some(Token::Str(s)) => Literal::String(s),
            Some(Token::Word(w)) => parse_bare_literal(&w).ok_or(FilterError::UnexpectedToken {
                expected: "literal",
                found: format!("'{w}'"),
            })?,
            Some(other) => {
                return Err(FilterError::UnexpectedToken {
                    expected: "literal",
                    found: other.to_string(),
                })
            }
            None => return Err(FilterError::UnexpectedEnd { expected: "literal" }),
        };

        Ok(Expr::Compare { field, op, literal })
    }
}

fn parse_bare_literal(word: &str) -> Option<Literal> {
    match word {
        "true" => Some(Literal::Bool(true)),
        "false" => Some(Literal::Bool(false)),
        "null" => Some(Literal::Null),
        w if NUMBER_RE.is_match(w) => w.parse::<f64>().ok().map(Literal::Number),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: &'static str, found: String },
    #[error("expected {expected}, found end of filter")]
    UnexpectedEnd { expected: &'static str },
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("unbalanced parentheses")]
    UnbalancedParen,
    #[error("filter nests '(' or 'not' deeper than {MAX_NESTING} levels")]
    TooDeep,
    #[error("filter has more than {MAX_BINARY_OPS} 'and'/'or' operators")]
    TooLong,
    #[error("invalid field path: {0}")]
    InvalidPath(#[from] PathError),
}
