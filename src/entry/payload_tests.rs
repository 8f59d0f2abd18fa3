//! Tests for payload serialization.

use serde_json::{Value, json};

use super::{LogEntry, Payload};

const PROJECT: &str = "my-project";

fn entry() -> LogEntry {
    LogEntry::new("Backup done", "Nightly backup finished", "42 files copied")
}

fn to_value(entry: &LogEntry) -> Value {
    serde_json::from_slice(&Payload::new(PROJECT, entry).to_bytes()).unwrap()
}

#[test]
fn required_fields_are_always_present() {
    assert_eq!(
        to_value(&entry()),
        json!({
            "projectId": "my-project",
            "title": "Backup done",
            "summary": "Nightly backup finished",
            "body": "42 files copied",
        })
    );
}

#[test]
fn absent_optional_fields_are_omitted_not_null() {
    let value = to_value(&entry());
    let object = value.as_object().unwrap();

    for key in [
        "link",
        "push",
        "tags",
        "groups",
        "externalChannels",
        "icon",
        "properties",
    ] {
        assert!(!object.contains_key(key), "{key} should be omitted");
    }
}

#[test]
fn push_false_is_included() {
    let value = to_value(&entry().with_push(false));

    assert_eq!(value["push"], json!(false));
}

#[test]
fn empty_lists_are_included() {
    let value = to_value(
        &entry()
            .with_tags(Vec::<String>::new())
            .with_groups(Vec::<String>::new())
            .with_external_channels(Vec::<String>::new()),
    );

    assert_eq!(value["tags"], json!([]));
    assert_eq!(value["groups"], json!([]));
    assert_eq!(value["externalChannels"], json!([]));
}

#[test]
fn empty_link_and_icon_are_included() {
    let value = to_value(&entry().with_link("").with_icon(""));

    assert_eq!(value["link"], json!(""));
    assert_eq!(value["icon"], json!(""));
}

#[test]
fn list_order_is_preserved() {
    let value = to_value(&entry().with_tags(["zeta", "alpha", "mid"]));

    assert_eq!(value["tags"], json!(["zeta", "alpha", "mid"]));
}

#[test]
fn properties_are_nested_verbatim() {
    let value = to_value(
        &entry()
            .with_property("files", 42)
            .with_property("meta", json!({"host": "db-1", "ok": true})),
    );

    assert_eq!(
        value["properties"],
        json!({"files": 42, "meta": {"host": "db-1", "ok": true}})
    );
}

#[test]
fn fields_are_serialized_in_fixed_order() {
    let full = entry()
        .with_link("https://example.com")
        .with_push(true)
        .with_tags(["a"])
        .with_groups(["b"])
        .with_external_channels(["c"])
        .with_icon("i")
        .with_property("k", "v");

    let text = String::from_utf8(Payload::new(PROJECT, &full).to_bytes()).unwrap();

    assert_eq!(
        text,
        r#"{"projectId":"my-project","title":"Backup done","summary":"Nightly backup finished","body":"42 files copied","link":"https://example.com","push":true,"tags":["a"],"groups":["b"],"externalChannels":["c"],"icon":"i","properties":{"k":"v"}}"#
    );
}

#[test]
fn text_is_json_escaped() {
    let entry = LogEntry::new("Quote \"x\"", "line\nbreak", "tab\tand ✓");
    let text = String::from_utf8(Payload::new(PROJECT, &entry).to_bytes()).unwrap();

    assert!(text.contains(r#""title":"Quote \"x\"""#));
    assert!(text.contains(r#""summary":"line\nbreak""#));
    assert!(text.contains("tab\\tand ✓"));
}
