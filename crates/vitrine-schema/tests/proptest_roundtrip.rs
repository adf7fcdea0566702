#![forbid(unsafe_code)]

//! Property tests for the serialize/validate round trip.
//!
//! For every tree the builders can produce, serializing to JSON and
//! validating the result must yield a deep-equal tree. Generators cover
//! every variant, optional fields both present and absent, and nesting
//! through children, key/value rows, and button groups.

use proptest::prelude::*;
use vitrine_schema::{
    Action, Align, AmountProps, AvatarProps, ButtonGroupProps, ButtonProps, ColProps, DividerProps,
    FontWeight, FrameContentProps, FrameHeaderProps, FrameProps, FrameTitleProps, Gap,
    KeyValueListProps, KeyValueRowProps, Orientation, RowProps, SpacerProps, TextColor, TextProps,
    TextSize, TimeProps, WidgetNode, validate_widget,
};

fn arb_label() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,-]{0,16}"
}

fn arb_gap() -> impl Strategy<Value = Gap> {
    prop_oneof![
        Just(Gap::None),
        Just(Gap::Sm),
        Just(Gap::Md),
        Just(Gap::Lg)
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_label().prop_map(|id| Action::ApproveTool { tool_call_id: id }),
        arb_label().prop_map(|id| Action::RejectTool { tool_call_id: id }),
        arb_label().prop_map(|to| Action::Navigate { to }),
        arb_label().prop_map(|event| Action::Emit {
            event,
            payload: None
        }),
    ]
}

fn arb_button() -> impl Strategy<Value = ButtonProps> {
    (
        arb_label(),
        proptest::option::of(arb_action()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(label, action, disabled)| {
            let mut button = ButtonProps::new(label);
            if let Some(action) = action {
                button = button.on_click_action(action);
            }
            if let Some(disabled) = disabled {
                button = button.disabled(disabled);
            }
            button
        })
}

fn arb_leaf() -> impl Strategy<Value = WidgetNode> {
    prop_oneof![
        arb_label().prop_map(|value| -> WidgetNode {
            TextProps::new(value)
                .weight(FontWeight::Bold)
                .color(TextColor::Emphasis)
                .into()
        }),
        arb_label()
            .prop_map(|value| -> WidgetNode { TextProps::new(value).size(TextSize::Sm).into() }),
        (-1.0e12f64..1.0e12).prop_map(|value| -> WidgetNode {
            AmountProps::new(value).currency("NGN").into()
        }),
        Just(WidgetNode::Time(TimeProps::new("2026-03-05T14:30:00Z"))),
        Just(WidgetNode::Avatar(AvatarProps::new().fallback("Ada Obi"))),
        proptest::option::of(0.0f64..8.0).prop_map(|grow| -> WidgetNode {
            let spacer = SpacerProps::new();
            match grow {
                Some(grow) => spacer.grow(grow).into(),
                None => spacer.into(),
            }
        }),
        Just(WidgetNode::Divider(
            DividerProps::new()
                .orientation(Orientation::Horizontal)
                .spacing(Gap::Md)
        )),
        arb_button().prop_map(WidgetNode::Button),
        Just(WidgetNode::FrameTitle(FrameTitleProps::new("Summary"))),
    ]
}

fn arb_node() -> impl Strategy<Value = WidgetNode> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        let children = proptest::collection::vec(inner.clone(), 0..4);
        let rows = proptest::collection::vec(
            (arb_label(), inner.clone())
                .prop_map(|(label, value)| KeyValueRowProps::new(label, value)),
            0..3,
        );
        let buttons = proptest::collection::vec(arb_button(), 0..3);
        prop_oneof![
            children
                .clone()
                .prop_map(|c| -> WidgetNode { FrameProps::new(c).into() }),
            children
                .clone()
                .prop_map(|c| -> WidgetNode { FrameHeaderProps::new(c).into() }),
            children.clone().prop_map(|c| -> WidgetNode {
                FrameContentProps::new(c).is_expanded(true).into()
            }),
            (children.clone(), arb_gap()).prop_map(|(c, gap)| -> WidgetNode {
                RowProps::new(c).gap(gap).align(Align::Between).into()
            }),
            (children, arb_gap())
                .prop_map(|(c, gap)| -> WidgetNode { ColProps::new(c).gap(gap).into() }),
            rows.prop_map(|items| -> WidgetNode {
                KeyValueListProps::new(items).dividers(true).into()
            }),
            buttons.prop_map(|b| -> WidgetNode { ButtonGroupProps::new(b).gap(Gap::Md).into() }),
        ]
    })
}

proptest! {
    #[test]
    fn serialize_validate_round_trip(node in arb_node()) {
        let value = serde_json::to_value(&node).expect("tree serializes");
        let back = validate_widget(&value).expect("serialized tree validates");
        prop_assert_eq!(back, node);
    }

    #[test]
    fn string_round_trip(node in arb_node()) {
        let text = serde_json::to_string(&node).expect("tree serializes");
        let value: serde_json::Value = serde_json::from_str(&text).expect("parses");
        let back = validate_widget(&value).expect("validates");
        prop_assert_eq!(back, node);
    }
}
