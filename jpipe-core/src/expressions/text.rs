use serde_json::{Number, Value as JsonValue};

/// Scalars are everything except lists and objects.
pub fn is_primitive(value: &JsonValue) -> bool {
    !matches!(value, JsonValue::Array(_) | JsonValue::Object(_))
}

/// Text form of a string, number, or boolean. `None` for null, lists, and objects.
pub fn scalar_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(format_number(n)),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

/// Line-oriented rendering: raw strings, plain numbers/booleans, empty for
/// null, compact JSON for lists and objects.
pub fn render_text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::Array(_) | JsonValue::Object(_) => value.to_string(),
        other => scalar_text(other).unwrap_or_default(),
    }
}

pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map(format_f64).unwrap_or_else(|| n.to_string())
}

/// Integral floats print without a fractional part (`3.0` -> `3`).
pub fn format_f64(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
