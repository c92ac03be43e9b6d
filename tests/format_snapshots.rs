//! Snapshot tests for rendered parse trees

use rough_json::parse;
use rough_json::rough::formats::{FormatRegistry, Formatter, JsonFormatter};

fn render(input: &str, format: &str) -> String {
    let node = parse(input).expect("input should parse");
    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&node, format).expect("format should exist");
    output.trim_end().to_string()
}

#[test]
fn test_treeviz_mixed_document() {
    let output = render(
        r#"{"user": {"name": "Ada", "ids": [1, -2.5e3]}, "active": true, "note": null}"#,
        "treeviz",
    );
    insta::assert_snapshot!(output, @r###"
    └─ object: 3 members
      ├─ "user" = object: 2 members
      │ ├─ "name" = string: "Ada"
      │ └─ "ids" = array: 2 items
      │   ├─ number: 1
      │   └─ number: -2.5e3
      ├─ "active" = boolean: true
      └─ "note" = null
    "###);
}

#[test]
fn test_treeviz_duplicate_keys() {
    let output = render(r#"{"a": 1, "a": 2}"#, "treeviz");
    insta::assert_snapshot!(output, @r###"
    └─ object: 2 members
      ├─ "a" = number: 1
      └─ "a" = number: 2
    "###);
}

#[test]
fn test_treeviz_empty_containers() {
    let output = render("[[], {}]", "treeviz");
    insta::assert_snapshot!(output, @r###"
    └─ array: 2 items
      ├─ array: 0 items
      └─ object: 0 members
    "###);
}

#[test]
fn test_json_compact() {
    let node = parse(r#"[null, true, 12, "x"]"#).unwrap();
    let output = JsonFormatter::new(false).serialize(&node).unwrap();
    insta::assert_snapshot!(output, @r###"{"type":"array","items":[{"type":"null"},{"type":"boolean","value":true},{"type":"number","text":"12"},{"type":"string","text":"\"x\""}]}"###);
}
