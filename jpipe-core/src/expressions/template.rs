use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value as JsonValue;

use super::path::{get_by_path, parse_path, PathError};
use super::text::{is_primitive, render_text};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub parts: Vec<Part>,
}

/// Result of expanding a template, keeping track of placeholders that fell
/// back to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expansion {
    pub text: String,
    pub unresolved: Vec<String>,
}

enum Lookup {
    Resolved(String),
    Unresolved,
}

/// Replace every `{{ key }}` in `template` with the value resolved from
/// `item`. Keys that do not resolve become empty strings.
pub fn substitute_template(template: &str, item: &JsonValue, index: usize) -> String {
    expand_template(template, item, index).text
}

pub fn expand_template(template: &str, item: &JsonValue, index: usize) -> Expansion {
    let mut unresolved = Vec::new();
    let text = PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let key = caps.get(1).map_or("", |m| m.as_str().trim());
            match lookup(key, item, index) {
                Lookup::Resolved(s) => s,
                Lookup::Unresolved => {
                    unresolved.push(key.to_string());
                    String::new()
                }
            }
        })
        .into_owned();

    if !unresolved.is_empty() {
        tracing::debug!(template, ?unresolved, index, "template placeholders left empty");
    }
    Expansion { text, unresolved }
}

fn lookup(key: &str, item: &JsonValue, index: usize) -> Lookup {
    if key == "index" {
        return Lookup::Resolved(index.to_string());
    }
    if key == "." || (key == "value" && is_primitive(item)) {
        return match item {
            JsonValue::Null => Lookup::Unresolved,
            other => Lookup::Resolved(render_text(other)),
        };
    }
    if key.is_empty() {
        return Lookup::Unresolved;
    }
    match get_by_path(item, key) {
        None | Some(JsonValue::Null) => Lookup::Unresolved,
        Some(v) => Lookup::Resolved(render_text(v)),
    }
}

/// Split a template into literal text and placeholder keys, rejecting keys
/// that could never resolve.
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(input) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            parts.push(Part::Literal(input[last..whole.start()].to_string()));
        }
        let key = inner.as_str().trim();
        validate_key(key)?;
        parts.push(Part::Placeholder(key.to_string()));
        last = whole.end();
    }

    let rest = &input[last..];
    if rest.contains("{{") {
        return Err(TemplateError::UnclosedPlaceholder);
    }
    if !rest.is_empty() {
        parts.push(Part::Literal(rest.to_string()));
    }

    Ok(Template { parts })
}

fn validate_key(key: &str) -> Result<(), TemplateError> {
    match key {
        "" => Err(TemplateError::EmptyPlaceholder),
        "index" | "." | "value" => Ok(()),
        _ => parse_path(key)
            .map(|_| ())
            .map_err(|source| TemplateError::InvalidKey {
                key: key.to_string(),
                source,
            }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("empty placeholder '{{{{}}}}'")]
    EmptyPlaceholder,
    #[error("unclosed placeholder (missing '}}}}')")]
    UnclosedPlaceholder,
    #[error("invalid placeholder key {key:?}: {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: PathError,
    },
}
