use jpipe_core::{get_by_path, select_path};
use serde_json::{json, Value};

fn calendar() -> Value {
    json!({
        "events": [
            {
                "title": "Standup",
                "attendees": [
                    {"email": "ana@example.com"},
                    {"email": "bo@example.com"}
                ]
            },
            {
                "title": "Review",
                "attendees": [
                    {"email": "cy@example.com"}
                ]
            },
            {
                "title": "Focus time",
                "attendees": []
            }
        ]
    })
}

#[test]
fn empty_and_dot_paths_are_identity() {
    for v in [json!({"a": 1}), json!([1, 2]), json!("s"), json!(3.5), json!(false)] {
        assert_eq!(get_by_path(&v, ""), Some(&v));
        assert_eq!(get_by_path(&v, "."), Some(&v));
    }
}

#[test]
fn null_root_never_resolves() {
    for path in ["", ".", "a", "a.b", "[0]", "[*]"] {
        assert_eq!(get_by_path(&Value::Null, path), None);
    }
}

#[test]
fn nested_fields_resolve() {
    let o = json!({"address": {"city": "NYC"}});
    assert_eq!(get_by_path(&o, "address.city"), Some(&json!("NYC")));
    assert_eq!(get_by_path(&o, "address.zip"), None);
    assert_eq!(get_by_path(&o, "address.city.name"), None);
}

#[test]
fn indices_and_wildcards() {
    let o = json!({"tags": ["a", "b", "c"]});
    assert_eq!(get_by_path(&o, "tags[0]"), Some(&json!("a")));
    assert_eq!(get_by_path(&o, "tags[10]"), None);
    assert_eq!(get_by_path(&o, "tags[*]"), Some(&json!(["a", "b", "c"])));
}

#[test]
fn wildcard_in_get_returns_array_and_stops() {
    let data = calendar();
    let events = get_by_path(&data, "events[*].title").unwrap();
    assert!(events.is_array());
    assert_eq!(events.as_array().unwrap().len(), 3);
}

#[test]
fn traversal_through_null_or_wrong_shape_misses() {
    let o = json!({"a": null, "b": 5, "c": [1]});
    assert_eq!(get_by_path(&o, "a.x"), None);
    assert_eq!(get_by_path(&o, "b.x"), None);
    assert_eq!(get_by_path(&o, "b[0]"), None);
    assert_eq!(get_by_path(&o, "c.x"), None);
    assert_eq!(get_by_path(&o, "a"), Some(&Value::Null));
}

#[test]
fn malformed_paths_miss() {
    let o = json!({"a": {"b": 1}});
    assert_eq!(get_by_path(&o, "a..b"), None);
    assert_eq!(get_by_path(&o, "a[b"), None);
    assert!(select_path(&o, "a[x]").is_empty());
}

#[test]
fn select_empty_path_wraps_non_lists() {
    let o = json!({"foo": "bar"});
    assert_eq!(select_path(&o, ""), vec![&o]);

    let list = json!([1, 2, 3]);
    let selected: Vec<Value> = select_path(&list, "").into_iter().cloned().collect();
    assert_eq!(selected, vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn select_final_list_is_not_nested() {
    let o = json!({"tags": ["a", "b"], "name": "x"});
    assert_eq!(select_path(&o, "tags"), vec![&json!("a"), &json!("b")]);
    assert_eq!(select_path(&o, "name"), vec![&json!("x")]);
    assert!(select_path(&o, "missing").is_empty());
}

#[test]
fn double_wildcard_flattens_in_order() {
    let data = calendar();
    let emails: Vec<&str> = select_path(&data, "events[*].attendees[*].email")
        .into_iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        emails,
        vec!["ana@example.com", "bo@example.com", "cy@example.com"]
    );
}

#[test]
fn wildcard_branches_skip_misses() {
    let data = json!({"items": [{"id": 1}, {"name": "no id"}, {"id": 3}]});
    assert_eq!(select_path(&data, "items[*].id"), vec![&json!(1), &json!(3)]);
}

#[test]
fn list_root_can_be_addressed_directly() {
    let data = json!([{"name": "a"}, {"name": "b"}]);
    assert_eq!(select_path(&data, "[*].name"), vec![&json!("a"), &json!("b")]);
    assert_eq!(select_path(&data, "[1].name"), vec![&json!("b")]);
    assert_eq!(get_by_path(&data, "[0].name"), Some(&json!("a")));
}

#[test]
fn index_after_wildcard_applies_per_branch() {
    let data = json!({"rows": [[1, 2], [3, 4], [5]]});
    assert_eq!(
        select_path(&data, "rows[*][1]"),
        vec![&json!(2), &json!(4)]
    );
}

#[test]
fn trailing_wildcard_keeps_nested_lists_whole() {
    let data = json!([{"rows": [[1, 2], [3]]}]);
    let (a, b) = (json!([1, 2]), json!([3]));
    let expected = vec![&a, &b];
    assert_eq!(select_path(&data, "[0].rows[*]"), expected);
    assert_eq!(select_path(&data, "[0].rows"), expected);
}
