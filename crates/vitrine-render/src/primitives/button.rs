#![forbid(unsafe_code)]

//! Button.
//!
//! Buttons never execute anything themselves. The rendered element
//! carries the node's `onClickAction` as its click binding plus a
//! `data-path` the host can hand back to
//! [`activate`](crate::dispatch::activate) when the click arrives.

use vitrine_schema::{ButtonVariant, ControlSize, IconPosition, WidgetNode};

use super::apply_common;
use crate::output::{Element, Output};
use crate::registry::{RenderError, WidgetImpl};
use crate::renderer::RenderContext;

pub struct ButtonWidget;

impl WidgetImpl for ButtonWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Button(props) = node else {
            return Err(RenderError::wrong_node("Button", node.type_name()));
        };
        let disabled = props.disabled == Some(true);
        let mut el = Element::new("button");
        apply_common(&mut el, &props.common);
        el.set_attr(
            "data-variant",
            props.variant.unwrap_or(ButtonVariant::Outline).as_str(),
        );
        el.set_attr("data-size", props.size.unwrap_or(ControlSize::Md).as_str());
        el.set_attr("data-path", ctx.path());
        if props.full_width == Some(true) {
            el.set_attr("data-full-width", "true");
        }
        if disabled {
            el.set_attr("disabled", "true");
        }
        if let Some(icon) = &props.icon {
            el.set_attr("data-icon", icon);
            el.set_attr(
                "data-icon-position",
                props
                    .icon_position
                    .unwrap_or(IconPosition::Left)
                    .as_str(),
            );
        }
        // A disabled button keeps its label but loses its binding.
        if !disabled && let Some(action) = &props.on_click_action {
            el.action = Some(action.clone());
        }
        el.push(Output::text(&props.label));
        Ok(el.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::output::Output;
    use crate::registry::Registry;
    use crate::renderer::Renderer;
    use vitrine_schema::{Action, ButtonProps, WidgetNode};

    fn render(node: WidgetNode) -> Output {
        let registry = Registry::with_builtins();
        Renderer::new(&registry).render(&node)
    }

    #[test]
    fn binding_carries_the_action_and_path() {
        let node = ButtonProps::new("Approve").on_click_action(Action::ApproveTool {
            tool_call_id: "call_9".into(),
        });
        let Output::Element(el) = render(node.into()) else {
            panic!("expected element");
        };
        assert_eq!(
            el.action,
            Some(Action::ApproveTool {
                tool_call_id: "call_9".into()
            })
        );
        assert_eq!(el.attrs.get("data-path").map(String::as_str), Some("root"));
        assert_eq!(el.text_content(), "Approve");
    }

    #[test]
    fn disabled_button_loses_its_binding() {
        let node = ButtonProps::new("Approve")
            .disabled(true)
            .on_click_action(Action::Navigate { to: "/x".into() });
        let Output::Element(el) = render(node.into()) else {
            panic!("expected element");
        };
        assert_eq!(el.action, None);
        assert_eq!(el.attrs.get("disabled").map(String::as_str), Some("true"));
    }

    #[test]
    fn render_time_defaults() {
        let Output::Element(el) = render(ButtonProps::new("Ok").into()) else {
            panic!("expected element");
        };
        assert_eq!(el.attrs.get("data-variant").map(String::as_str), Some("outline"));
        assert_eq!(el.attrs.get("data-size").map(String::as_str), Some("md"));
    }
}
