#![forbid(unsafe_code)]

//! End-to-end pipeline tests: external JSON → validation → rendering →
//! activation.

use std::sync::Mutex;

use serde_json::json;
use vitrine_build::{from_json, from_value};
use vitrine_render::{
    ActionContext, ActionSink, Output, Registry, Renderer, activate, builtin_registry,
};
use vitrine_schema::Action;

struct Recording(Mutex<Vec<String>>);

impl ActionSink for Recording {
    fn dispatch(&self, action: &Action, ctx: ActionContext<'_>) {
        self.0
            .lock()
            .unwrap()
            .push(format!("{}@{}", action.type_name(), ctx.path));
    }
}

#[test]
fn tool_result_payload_renders_and_activates() {
    let payload = json!({
        "type": "Frame",
        "className": "payment-summary-widget",
        "children": [
            {"type": "FrameHeader", "children": [
                {"type": "FrameTitle", "value": "Payment Batch"}
            ]},
            {"type": "FrameContent", "children": [
                {"type": "KeyValueList", "items": [
                    {"type": "KeyValueRow", "label": "Total", "value":
                        {"type": "Amount", "value": 150000.0, "currency": "NGN"}}
                ]},
                {"type": "ButtonGroup", "buttons": [
                    {"type": "Button", "label": "Approve", "onClickAction":
                        {"type": "approve_tool", "toolCallId": "call_42"}},
                    {"type": "Button", "label": "Reject", "onClickAction":
                        {"type": "reject_tool", "toolCallId": "call_42"}}
                ]}
            ]}
        ]
    });

    let tree = from_value(&payload).expect("payload validates");
    let renderer = Renderer::new(builtin_registry());
    let Output::Element(frame) = renderer.render(&tree) else {
        panic!("expected an element at the root");
    };
    assert_eq!(frame.tag, "frame");
    assert!(frame.text_content().contains("\u{20a6}150,000"));

    let sink = Recording(Mutex::new(Vec::new()));
    let approve_path = "root.children[1].children[1].buttons[0]";
    activate(&tree, approve_path, &sink).expect("approve button activates");
    assert_eq!(
        sink.0.lock().unwrap().as_slice(),
        &[format!("approve_tool@{approve_path}")]
    );
}

#[test]
fn malformed_payload_renders_nothing() {
    // Validation fails atomically; there is no partial tree to render.
    let err = from_json(r#"{"type": "Frame", "children": [{"type": "Mystery"}]}"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Mystery"), "{msg}");
    assert!(msg.contains("root.children[0]"), "{msg}");
}

#[test]
fn unknown_type_in_custom_registry_degrades_per_node() {
    // A host registry that never learned about Avatar.
    let mut registry = Registry::with_builtins();
    registry.unregister("Avatar");

    let tree = from_value(&json!({
        "type": "Row",
        "children": [
            {"type": "Text", "value": "before"},
            {"type": "Avatar", "fallback": "Ada Obi"},
            {"type": "Text", "value": "after"}
        ]
    }))
    .unwrap();

    let renderer = Renderer::new(&registry);
    let Output::Element(row) = renderer.render(&tree) else {
        panic!("expected element");
    };
    assert_eq!(row.children.len(), 3);
    let Output::Element(fallback) = &row.children[1] else {
        panic!("expected fallback element");
    };
    assert_eq!(fallback.tag, "unknown-widget");
    assert_eq!(
        fallback.attrs.get("data-path").map(String::as_str),
        Some("root.children[1]")
    );
    // Siblings are untouched.
    assert_eq!(row.text_content(), "beforeUnknown widget type: Avatarafter");
}

#[test]
fn hidden_subtrees_render_empty_but_stay_addressable() {
    let tree = from_value(&json!({
        "type": "Col",
        "children": [
            {"type": "Text", "value": "shown"},
            {"type": "Text", "value": "hidden", "visible": false}
        ]
    }))
    .unwrap();
    let renderer = Renderer::new(builtin_registry());
    let Output::Element(col) = renderer.render(&tree) else {
        panic!("expected element");
    };
    // The hidden child produced Empty, which containers drop.
    assert_eq!(col.children.len(), 1);
    assert_eq!(col.text_content(), "shown");
    // The node still exists in the tree for hosts that resolve paths.
    assert!(vitrine_render::resolve_path(&tree, "root.children[1]").is_some());
}

#[test]
fn same_tree_renders_at_two_mount_points() {
    // Inline preview and drawer render the same widget; paths keep the
    // two instances distinguishable.
    let tree = from_value(&json!({
        "type": "Button",
        "label": "Share",
        "onClickAction": {"type": "share"}
    }))
    .unwrap();
    let renderer = Renderer::new(builtin_registry());

    let Output::Element(inline) = renderer.render_at(&tree, "inline") else {
        panic!("expected element");
    };
    let Output::Element(drawer) = renderer.render_at(&tree, "drawer") else {
        panic!("expected element");
    };
    assert_eq!(inline.attrs.get("data-path").map(String::as_str), Some("inline"));
    assert_eq!(drawer.attrs.get("data-path").map(String::as_str), Some("drawer"));
}
