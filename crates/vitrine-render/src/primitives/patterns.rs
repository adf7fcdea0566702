#![forbid(unsafe_code)]

//! KeyValueRow, KeyValueList, and ButtonGroup.

use vitrine_schema::{Gap, GroupPosition, WidgetNode};

use super::apply_common;
use crate::output::{Element, Output};
use crate::registry::{RenderError, WidgetImpl};
use crate::renderer::RenderContext;

pub struct KeyValueRowWidget;

impl WidgetImpl for KeyValueRowWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::KeyValueRow(props) = node else {
            return Err(RenderError::wrong_node("KeyValueRow", node.type_name()));
        };
        let mut el = Element::new("key-value-row");
        apply_common(&mut el, &props.common);
        if props.emphasis == Some(true) {
            el.set_attr("data-emphasis", "true");
        }
        el.push(
            Element::new("label")
                .child(Output::text(&props.label))
                .into(),
        );
        el.push(ctx.child_at(&props.value, "value"));
        Ok(el.into())
    }
}

pub struct KeyValueListWidget;

impl WidgetImpl for KeyValueListWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::KeyValueList(props) = node else {
            return Err(RenderError::wrong_node("KeyValueList", node.type_name()));
        };
        let mut el = Element::new("key-value-list");
        apply_common(&mut el, &props.common);
        el.set_attr("data-gap", props.gap.unwrap_or(Gap::Md).as_str());
        el.set_attr(
            "data-dividers",
            if props.dividers.unwrap_or(true) { "true" } else { "false" },
        );
        for (index, item) in props.items.iter().enumerate() {
            let row = WidgetNode::KeyValueRow(item.clone());
            el.push(ctx.child_at(&row, &format!("items[{index}]")));
        }
        Ok(el.into())
    }
}

pub struct ButtonGroupWidget;

impl WidgetImpl for ButtonGroupWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::ButtonGroup(props) = node else {
            return Err(RenderError::wrong_node("ButtonGroup", node.type_name()));
        };
        let mut el = Element::new("button-group");
        apply_common(&mut el, &props.common);
        el.set_attr("data-gap", props.gap.unwrap_or(Gap::Md).as_str());
        el.set_attr(
            "data-position",
            props.position.unwrap_or(GroupPosition::Static).as_str(),
        );
        for (index, button) in props.buttons.iter().enumerate() {
            let node = WidgetNode::Button(button.clone());
            el.push(ctx.child_at(&node, &format!("buttons[{index}]")));
        }
        Ok(el.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::output::Output;
    use crate::registry::Registry;
    use crate::renderer::Renderer;
    use vitrine_schema::{
        Action, ButtonGroupProps, ButtonProps, KeyValueListProps, KeyValueRowProps, TextProps,
        WidgetNode,
    };

    fn render(node: WidgetNode) -> Output {
        let registry = Registry::with_builtins();
        Renderer::new(&registry).render(&node)
    }

    #[test]
    fn row_renders_label_then_value() {
        let node = KeyValueRowProps::new("Status", TextProps::new("Queued"));
        let Output::Element(el) = render(node.into()) else {
            panic!("expected element");
        };
        assert_eq!(el.tag, "key-value-row");
        assert_eq!(el.children.len(), 2);
        assert_eq!(el.text_content(), "StatusQueued");
    }

    #[test]
    fn list_items_get_bracketed_paths() {
        let list = KeyValueListProps::new(vec![
            KeyValueRowProps::new("A", TextProps::new("1")),
            KeyValueRowProps::new(
                "B",
                ButtonProps::new("Open").on_click_action(Action::Expand { target: None }),
            ),
        ]);
        let Output::Element(el) = render(list.into()) else {
            panic!("expected element");
        };
        assert_eq!(el.children.len(), 2);
        // Dig out the nested button and check its path attribute.
        let Output::Element(second_row) = &el.children[1] else {
            panic!("expected row element");
        };
        let Output::Element(button) = &second_row.children[1] else {
            panic!("expected button element");
        };
        assert_eq!(
            button.attrs.get("data-path").map(String::as_str),
            Some("root.items[1].value")
        );
    }

    #[test]
    fn group_renders_buttons_with_paths() {
        let group = ButtonGroupProps::new(vec![
            ButtonProps::new("Approve"),
            ButtonProps::new("Reject"),
        ]);
        let Output::Element(el) = render(group.into()) else {
            panic!("expected element");
        };
        assert_eq!(el.children.len(), 2);
        let Output::Element(second) = &el.children[1] else {
            panic!("expected button element");
        };
        assert_eq!(
            second.attrs.get("data-path").map(String::as_str),
            Some("root.buttons[1]")
        );
        assert_eq!(el.attrs.get("data-position").map(String::as_str), Some("static"));
    }
}
