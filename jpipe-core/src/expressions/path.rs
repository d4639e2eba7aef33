use serde_json::Value as JsonValue;

/// One step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Field(String),
    Index(usize),
    Wildcard,
}

/// Parse a dotted/bracketed path such as `events[*].attendees[0].email`.
///
/// An empty path and `"."` both parse to no segments (identity). A single
/// leading `.` is accepted, and a part may consist of brackets only so that
/// `[*].name` addresses a list root.
pub fn parse_path(input: &str) -> Result<Vec<Segment>, PathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "." {
        return Ok(Vec::new());
    }
    let s = trimmed.strip_prefix('.').unwrap_or(trimmed);
    let chars: Vec<char> = s.chars().collect();

    let mut segments = Vec::new();
    let mut pos = 0;
    loop {
        let part_start = segments.len();

        let mut name = String::new();
        while let Some(&ch) = chars.get(pos) {
            match ch {
                '.' | '[' => break,
                ']' => return Err(PathError::UnexpectedCharacter { ch, position: pos }),
                _ => {
                    name.push(ch);
                    pos += 1;
                }
            }
        }
        if !name.is_empty() {
            segments.push(Segment::Field(name));
        }

        while chars.get(pos) == Some(&'[') {
            pos += 1;
            let mut inner = String::new();
            let mut closed = false;
            while let Some(&ch) = chars.get(pos) {
                pos += 1;
                if ch == ']' {
                    closed = true;
                    break;
                }
                inner.push(ch);
            }
            if !closed {
                return Err(PathError::UnclosedBracket);
            }
            let inner = inner.trim();
            if inner == "*" {
                segments.push(Segment::Wildcard);
            } else {
                let index = inner
                    .parse::<usize>()
                    .map_err(|_| PathError::InvalidIndex(inner.to_string()))?;
                segments.push(Segment::Index(index));
            }
        }

        if segments.len() == part_start {
            return Err(PathError::EmptySegment);
        }

        match chars.get(pos) {
            None => break,
            Some('.') => {
                pos += 1;
                if pos == chars.len() {
                    return Err(PathError::EmptySegment);
                }
            }
            Some(&ch) => return Err(PathError::UnexpectedCharacter { ch, position: pos }),
        }
    }

    Ok(segments)
}

/// Resolve a path against `root`, returning `None` for any miss.
///
/// A `null` root never resolves. A `[*]` segment yields the whole array at
/// that position; segments after it are not applied (use [`select_path`] to
/// branch over the elements).
pub fn get_by_path<'a>(root: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    match parse_path(path) {
        Ok(segments) => resolve(root, &segments),
        Err(e) => {
            tracing::trace!(path, error = %e, "path did not parse; treating as a miss");
            None
        }
    }
}

/// Segment-level form of [`get_by_path`].
pub fn resolve<'a>(root: &'a JsonValue, segments: &[Segment]) -> Option<&'a JsonValue> {
    if root.is_null() {
        return None;
    }
    let mut cur = root;
    for seg in segments {
        match seg {
            Segment::Field(name) => cur = cur.as_object()?.get(name)?,
            Segment::Index(i) => cur = cur.as_array()?.get(*i)?,
            Segment::Wildcard => return cur.is_array().then_some(cur),
        }
    }
    Some(cur)
}

/// Select every value addressed by `path`, flattening over wildcards.
///
/// Lists at the end of a path are spliced into the result rather than
/// nested, so `select_path([1,2,3], "")` is `[1,2,3]`. Elements matched by
/// a trailing `[*]` are not spliced again: `rows[*]` over `[[1,2],[3]]`
/// yields `[1,2]` and `[3]`, the same as `rows`.
pub fn select_path<'a>(root: &'a JsonValue, path: &str) -> Vec<&'a JsonValue> {
    match parse_path(path) {
        Ok(segments) => select(root, &segments),
        Err(e) => {
            tracing::trace!(path, error = %e, "path did not parse; selecting nothing");
            Vec::new()
        }
    }
}

/// Segment-level form of [`select_path`].
pub fn select<'a>(root: &'a JsonValue, segments: &[Segment]) -> Vec<&'a JsonValue> {
    let mut out = Vec::new();
    select_into(root, segments, &mut out);
    out
}

fn select_into<'a>(cur: &'a JsonValue, segments: &[Segment], out: &mut Vec<&'a JsonValue>) {
    let Some((first, rest)) = segments.split_first() else {
        match cur {
            JsonValue::Array(items) => out.extend(items.iter()),
            other => out.push(other),
        }
        return;
    };

    match first {
        Segment::Field(name) => {
            if let Some(next) = cur.as_object().and_then(|map| map.get(name)) {
                select_into(next, rest, out);
            }
        }
        Segment::Index(i) => {
            if let Some(next) = cur.as_array().and_then(|items| items.get(*i)) {
                select_into(next, rest, out);
            }
        }
        Segment::Wildcard => {
            let Some(items) = cur.as_array() else {
                return;
            };
            // A trailing wildcard yields the elements themselves, even when
            // they are lists.
            if rest.is_empty() {
                out.extend(items.iter());
            } else {
                for item in items {
                    select_into(item, rest, out);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path segment must not be empty")]
    EmptySegment,
    #[error("unclosed '[' in path")]
    UnclosedBracket,
    #[error("invalid array index: {0:?} (expected a non-negative integer or '*')")]
    InvalidIndex(String),
    #[error("unexpected {ch:?} at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
}
