use std::cmp::Ordering;
use std::fmt;

use serde_json::Value as JsonValue;

use super::text::{format_f64, scalar_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Contains,
    StartsWith,
    EndsWith,
}

impl CompareOp {
    pub fn from_symbol(s: &str) -> Option<Self> {
        Some(match s {
            "==" => Self::Eq,
            "!=" => Self::Ne,
            ">" => Self::Gt,
            "<" => Self::Lt,
            ">=" => Self::Ge,
            "<=" => Self::Le,
            "contains" => Self::Contains,
            "startsWith" => Self::StartsWith,
            "endsWith" => Self::EndsWith,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Contains => "contains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
}

impl Literal {
    pub fn text(&self) -> String {
        match self {
            Literal::Number(n) => format_f64(*n),
            Literal::String(s) => s.clone(),
            Literal::Bool(b) => b.to_string(),
            Literal::Null => "null".to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{s:?}"),
            other => f.write_str(&other.text()),
        }
    }
}

/// Compare a resolved field value against a literal.
pub fn compare(actual: &JsonValue, op: CompareOp, expected: &Literal) -> bool {
    match op {
        CompareOp::Eq => literal_eq(actual, expected),
        CompareOp::Ne => !literal_eq(actual, expected),
        CompareOp::Gt => numeric_cmp(actual, expected).is_some_and(Ordering::is_gt),
        CompareOp::Lt => numeric_cmp(actual, expected).is_some_and(Ordering::is_lt),
        CompareOp::Ge => numeric_cmp(actual, expected).is_some_and(Ordering::is_ge),
        CompareOp::Le => numeric_cmp(actual, expected).is_some_and(Ordering::is_le),
        CompareOp::Contains => {
            let needle = expected.text().to_lowercase();
            match actual {
                JsonValue::Array(items) => items
                    .iter()
                    .filter_map(scalar_text)
                    .any(|t| t.to_lowercase() == needle),
                other => text_matches(other, |hay| hay.contains(&needle)),
            }
        }
        CompareOp::StartsWith => {
            let needle = expected.text().to_lowercase();
            text_matches(actual, |hay| hay.starts_with(&needle))
        }
        CompareOp::EndsWith => {
            let needle = expected.text().to_lowercase();
            text_matches(actual, |hay| hay.ends_with(&needle))
        }
    }
}

fn text_matches(actual: &JsonValue, pred: impl Fn(&str) -> bool) -> bool {
    scalar_text(actual).is_some_and(|t| pred(&t.to_lowercase()))
}

fn literal_eq(actual: &JsonValue, expected: &Literal) -> bool {
    match (actual, expected) {
        (JsonValue::Null, Literal::Null) => true,
        (JsonValue::Null, _) | (_, Literal::Null) => false,
        (JsonValue::Number(a), Literal::Number(b)) => a.as_f64() == Some(*b),
        (JsonValue::Array(_) | JsonValue::Object(_), _) => false,
        (a, b) => scalar_text(a).is_some_and(|t| t == b.text()),
    }
}

fn numeric_cmp(actual: &JsonValue, expected: &Literal) -> Option<Ordering> {
    match (actual.as_f64(), expected) {
        (Some(a), Literal::Number(b)) => a.partial_cmp(b),
        _ => None,
    }
}
