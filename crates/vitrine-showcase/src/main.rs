#![forbid(unsafe_code)]

//! Walkthrough of the full Vitrine pipeline.
//!
//! Builds the financial cards, round-trips one through JSON, hydrates a
//! template, renders everything to the output tree, and drives a tool
//! session through a park → preview → approve flow with a logging
//! action sink.
//!
//! ```sh
//! cargo run -p vitrine-showcase
//! ```

use std::collections::HashMap;

use serde_json::json;
use tracing::info;
use vitrine::prelude::*;
use vitrine::{PaymentSummaryData, payment_summary, to_json_compact};

struct LoggingSink;

impl ActionSink for LoggingSink {
    fn dispatch(&self, action: &vitrine::Action, ctx: ActionContext<'_>) {
        info!(
            action = action.type_name(),
            path = ctx.path,
            widget = ctx.node.type_name(),
            "action dispatched"
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let renderer = Renderer::new(builtin_registry());

    // 1. A financial card, built directly.
    let summary = payment_summary(&PaymentSummaryData {
        batch_reference: "BATCH-2026-001".into(),
        total_amount: 150_000.0,
        recipient_count: 3,
        currency: "NGN".into(),
        status: "Queued".into(),
        timestamp: "2026-03-05T14:30:00Z".into(),
    });
    let card: WidgetNode = summary.into();
    println!("--- payment summary (wire form) ---");
    println!("{}", to_json(&card));

    // 2. Round trip: the wire form validates back to the same tree.
    let back = from_json(&to_json(&card)).expect("round trip");
    assert_eq!(back, card);
    info!(nodes = card.node_count(), "round trip held");

    // 3. A template hydrated from a data record.
    let template = json!({
        "type": "Frame",
        "children": [
            {"type": "FrameHeader", "children": [
                {"type": "FrameTitle", "value": "Hello {{name}}"}
            ]},
            {"type": "FrameContent", "children": [
                {"type": "Text", "value": "You have {{count}} pending transfers."}
            ]}
        ]
    });
    let data = HashMap::from([
        ("name".to_string(), json!("Chioma")),
        ("count".to_string(), json!(2)),
    ]);
    let greeting = hydrate_template(&template, &data).expect("template hydrates");
    println!("--- hydrated template, rendered ---");
    println!(
        "{}",
        serde_json::to_string_pretty(&renderer.render(&greeting)).expect("output serializes")
    );

    // 4. A tool session: park, preview, approve, render the result.
    let mut session = ToolSession::new();
    for outbound in session.handle_event(VoiceEvent::SessionCreated) {
        info!(wire = %outbound.to_wire()["type"], "outbound");
    }

    let event = VoiceEvent::from_value(&json!({
        "type": "response.function_call_arguments.done",
        "name": "create_virtual_card",
        "call_id": "call_1",
        "arguments": "{\"label\": \"Ops Subscriptions\", \"currency\": \"NGN\", \"spend_limit\": 200000}"
    }));
    session.handle_event(event);
    info!(status = session.status(), pending = session.pending().len(), "call parked");

    println!("--- approval preview, rendered ---");
    let preview = session.pending()[0].preview.clone();
    println!(
        "{}",
        serde_json::to_string_pretty(&renderer.render(&preview)).expect("output serializes")
    );

    let out = session.approve("call_1").expect("call is pending");
    for outbound in &out {
        info!(wire = %outbound.to_wire()["type"], "outbound");
    }
    let result = &session.executions()[0].result;
    let widget = validate_widget(&result["_widget"]).expect("result widget validates");
    println!("--- tool result widget (wire form, compact) ---");
    println!("{}", to_json_compact(&widget));

    // 5. Deliver a click through the action contract.
    let approve_bar = validate_widget(&json!({
        "type": "ButtonGroup",
        "buttons": [
            {"type": "Button", "label": "Approve",
             "onClickAction": {"type": "approve_tool", "toolCallId": "call_2"}},
            {"type": "Button", "label": "Reject",
             "onClickAction": {"type": "reject_tool", "toolCallId": "call_2"}}
        ]
    }))
    .expect("approve bar validates");
    let sink = LoggingSink;
    let rendered = Renderer::with_sink(builtin_registry(), &sink).render(&approve_bar);
    if let Output::Element(el) = &rendered {
        info!(tag = el.tag, buttons = el.children.len(), "approve bar rendered");
    }
    activate(&approve_bar, "root.buttons[0]", &sink).expect("approve button fires");
}
