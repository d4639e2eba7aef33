use jpipe_core::{Pipeline, Stage};
use serde_json::{json, Value};

fn inbox() -> Value {
    json!({
        "messages": [
            {"id": "m1", "from": "ana@example.com", "unread": true, "size": 120},
            {"id": "m2", "from": "bo@example.com", "unread": false, "size": 80},
            {"id": "m3", "from": "cy@example.com", "unread": true, "size": 40}
        ]
    })
}

#[test]
fn default_pipeline_renders_root() {
    let lines = Pipeline::new().render(&json!(["a", 1, {"k": true}]));
    assert_eq!(lines, vec!["a", "1", r#"{"k":true}"#]);
}

#[test]
fn select_filter_template() {
    let lines = Pipeline::new()
        .select("messages")
        .filter("unread == true")
        .template("mail read {{id}} # {{index}}")
        .render(&inbox());
    assert_eq!(lines, vec!["mail read m1 # 0", "mail read m3 # 1"]);
}

#[test]
fn limit_applies_after_filtering() {
    let doc = inbox();
    let items = Pipeline::new()
        .select("messages[*].size")
        .filter("value < 100")
        .limit(1)
        .items(&doc);
    assert_eq!(items, vec![&json!(80)]);
}

#[test]
fn bad_filter_drops_every_item() {
    let lines = Pipeline::new()
        .select("messages")
        .filter("unread ===")
        .render(&inbox());
    assert!(lines.is_empty());
}

#[test]
fn validate_reports_each_stage() {
    let err = Pipeline::new()
        .select("a..b")
        .filter("x ==")
        .template("{{ }}")
        .validate()
        .unwrap_err();
    let stages: Vec<Stage> = err.violations.iter().map(|v| v.stage).collect();
    assert_eq!(stages, vec![Stage::Select, Stage::Filter, Stage::Template]);
}

#[test]
fn validate_accepts_well_formed_pipelines() {
    Pipeline::new()
        .select("events[*].attendees[*]")
        .filter("email endsWith '@example.com' and not optional == true")
        .template("notify {{email}}")
        .validate()
        .unwrap();
}
