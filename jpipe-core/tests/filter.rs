use jpipe_core::{evaluate_filter, try_evaluate_filter, FilterError};
use serde_json::json;

#[test]
fn empty_filter_keeps_everything() {
    for item in [json!({}), json!(null), json!([1]), json!("x")] {
        assert!(evaluate_filter(&item, ""));
        assert!(evaluate_filter(&item, "   "));
    }
}

#[test]
fn string_equality() {
    let item = json!({"status": "active"});
    assert!(evaluate_filter(&item, "status == 'active'"));
    assert!(!evaluate_filter(&item, "status == 'inactive'"));
    assert!(evaluate_filter(&item, r#"status != "inactive""#));
    assert!(!evaluate_filter(&item, "status == 'Active'"));
}

#[test]
fn string_operators_are_case_insensitive() {
    let item = json!({"name": "Test Item"});
    assert!(evaluate_filter(&item, "name contains 'test'"));
    assert!(evaluate_filter(&item, "name startsWith 'TEST'"));
    assert!(evaluate_filter(&item, "name endsWith 'item'"));
    assert!(!evaluate_filter(&item, "name endsWith 'test'"));
}

#[test]
fn primitive_items_use_value() {
    assert!(evaluate_filter(&json!(42), "value > 30"));
    assert!(!evaluate_filter(&json!(42), "value < 30"));
    assert!(evaluate_filter(&json!("hello"), "value contains 'ell'"));
    assert!(evaluate_filter(&json!(true), "value == true"));
}

#[test]
fn value_on_objects_is_a_regular_field() {
    assert!(evaluate_filter(&json!({"value": 3}), "value == 3"));
    assert!(!evaluate_filter(&json!({"other": 3}), "value == 3"));
}

#[test]
fn numeric_comparisons_require_numbers() {
    let item = json!({"count": 10, "label": "10"});
    assert!(evaluate_filter(&item, "count >= 10"));
    assert!(evaluate_filter(&item, "count <= 10.0"));
    assert!(evaluate_filter(&item, "count > -1"));
    assert!(!evaluate_filter(&item, "label > 5"));
    assert!(!evaluate_filter(&item, "count > 'abc'"));
    assert!(evaluate_filter(&item, "count == 10"));
}

#[test]
fn dotted_and_indexed_fields() {
    let item = json!({"organizer": {"email": "Ana@Example.com"}, "tags": ["urgent", "work"]});
    assert!(evaluate_filter(&item, "organizer.email endsWith '@example.com'"));
    assert!(evaluate_filter(&item, "tags[0] == 'urgent'"));
    assert!(evaluate_filter(&item, "tags contains 'WORK'"));
}

#[test]
fn missing_fields_never_match() {
    let item = json!({"a": 1});
    assert!(!evaluate_filter(&item, "b == 1"));
    assert!(!evaluate_filter(&item, "b != 1"));
    assert!(!evaluate_filter(&item, "b contains 'x'"));
}

#[test]
fn boolean_combinators() {
    let item = json!({"a": 1, "b": 2});
    assert!(evaluate_filter(&item, "a == 1 and b == 2"));
    assert!(!evaluate_filter(&item, "a == 1 and b == 3"));
    assert!(evaluate_filter(&item, "a == 9 or b == 2"));
    assert!(evaluate_filter(&item, "not a == 2"));
    assert!(!evaluate_filter(&item, "not a == 1 and b == 2"));
}

#[test]
fn mixed_combinators_group_left_to_right() {
    let item = json!({"a": 1, "b": 2, "c": 3});
    // (a == 0 and b == 2) or c == 3
    assert!(evaluate_filter(&item, "a == 0 and b == 2 or c == 3"));
    // (a == 1 or b == 0) and c == 0
    assert!(!evaluate_filter(&item, "a == 1 or b == 0 and c == 0"));
    // parentheses override
    assert!(evaluate_filter(&item, "a == 1 or (b == 0 and c == 0)"));
    assert!(!evaluate_filter(&item, "not (a == 1 or b == 0)"));
}

#[test]
fn malformed_filters_evaluate_false() {
    let item = json!({"a": 1});
    for filter in [
        "invalid syntax {{{",
        "a ==",
        "a = 1",
        "a == 'unterminated",
        "(a == 1",
        "a == 1 and",
        "a == 1 b == 2",
        "a matches 'x'",
        "a == bare",
    ] {
        assert!(!evaluate_filter(&item, filter), "{filter} should be rejected");
    }
}

#[test]
fn try_evaluate_reports_the_reason() {
    let item = json!({"a": 1});
    assert_eq!(try_evaluate_filter(&item, "a == 1"), Ok(true));
    assert_eq!(
        try_evaluate_filter(&item, "a matches 'x'"),
        Err(FilterError::UnknownOperator("matches".into()))
    );
}

#[test]
fn null_literal_matches_null_fields() {
    let item = json!({"deleted_at": null, "name": "x"});
    assert!(evaluate_filter(&item, "deleted_at == null"));
    assert!(evaluate_filter(&item, "name != null"));
}

#[test]
fn deeply_nested_filters_are_rejected() {
    let item = json!({"a": 1});
    let deep_parens = format!("{}a == 1{}", "(".repeat(100_000), ")".repeat(100_000));
    let deep_not = format!("{}a == 1", "not ".repeat(100_000));
    let unbalanced = "(".repeat(100_000);

    for filter in [&deep_parens, &deep_not, &unbalanced] {
        assert!(!evaluate_filter(&item, filter));
        assert_eq!(try_evaluate_filter(&item, filter), Err(FilterError::TooDeep));
    }
}

#[test]
fn overly_long_chains_are_rejected() {
    let item = json!({"a": 1});
    let chain = vec!["a == 1"; 5000].join(" and ");
    assert!(!evaluate_filter(&item, &chain));
    assert_eq!(try_evaluate_filter(&item, &chain), Err(FilterError::TooLong));
}

#[test]
fn nesting_within_limits_still_evaluates() {
    let item = json!({"a": 1});
    let nested = format!("{}a == 1{}", "(".repeat(10), ")".repeat(10));
    assert!(evaluate_filter(&item, &nested));
    assert!(evaluate_filter(&item, "not not a == 1"));
    let chain = vec!["a == 1"; 100].join(" and ");
    assert!(evaluate_filter(&item, &chain));
}
