#![forbid(unsafe_code)]

//! Frame and its header/title/actions/content sub-components.
//!
//! One canonical frame contract: a plain container whose expansion and
//! dismissal are externally controlled. `FrameContent.isExpanded` is
//! data handed down by the host; close/expand chrome is expressed with
//! ordinary `Button` nodes carrying `expand`/`emit` actions.

use vitrine_schema::WidgetNode;

use super::apply_common;
use crate::output::{Element, Output};
use crate::registry::{RenderError, WidgetImpl};
use crate::renderer::RenderContext;

pub struct FrameWidget;

impl WidgetImpl for FrameWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Frame(props) = node else {
            return Err(RenderError::wrong_node("Frame", node.type_name()));
        };
        let mut el = Element::new("frame");
        apply_common(&mut el, &props.common);
        if let Some(class) = &props.class_name {
            el.set_attr("class", class);
        }
        for (index, child) in props.children.iter().enumerate() {
            el.push(ctx.child(child, index));
        }
        Ok(el.into())
    }
}

pub struct FrameHeaderWidget;

impl WidgetImpl for FrameHeaderWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::FrameHeader(props) = node else {
            return Err(RenderError::wrong_node("FrameHeader", node.type_name()));
        };
        let mut el = Element::new("frame-header");
        apply_common(&mut el, &props.common);
        for (index, child) in props.children.iter().enumerate() {
            el.push(ctx.child(child, index));
        }
        Ok(el.into())
    }
}

pub struct FrameTitleWidget;

impl WidgetImpl for FrameTitleWidget {
    fn render(&self, node: &WidgetNode, _ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::FrameTitle(props) = node else {
            return Err(RenderError::wrong_node("FrameTitle", node.type_name()));
        };
        let mut el = Element::new("frame-title");
        apply_common(&mut el, &props.common);
        el.push(Output::text(&props.value));
        Ok(el.into())
    }
}

pub struct FrameActionsWidget;

impl WidgetImpl for FrameActionsWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::FrameActions(props) = node else {
            return Err(RenderError::wrong_node("FrameActions", node.type_name()));
        };
        let mut el = Element::new("frame-actions");
        apply_common(&mut el, &props.common);
        for (index, child) in props.children.iter().enumerate() {
            el.push(ctx.child(child, index));
        }
        Ok(el.into())
    }
}

pub struct FrameContentWidget;

impl WidgetImpl for FrameContentWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::FrameContent(props) = node else {
            return Err(RenderError::wrong_node("FrameContent", node.type_name()));
        };
        let mut el = Element::new("frame-content");
        apply_common(&mut el, &props.common);
        if let Some(expanded) = props.is_expanded {
            el.set_attr("data-expanded", expanded.to_string());
        }
        for (index, child) in props.children.iter().enumerate() {
            el.push(ctx.child(child, index));
        }
        Ok(el.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::output::Output;
    use crate::registry::Registry;
    use crate::renderer::Renderer;
    use vitrine_schema::{FrameContentProps, FrameProps, FrameTitleProps, WidgetNode};

    #[test]
    fn frame_carries_class_and_children() {
        let registry = Registry::with_builtins();
        let renderer = Renderer::new(&registry);
        let node: WidgetNode = FrameProps::new(vec![FrameTitleProps::new("Invoice").into()])
            .class_name("invoice-widget")
            .into();
        let Output::Element(el) = renderer.render(&node) else {
            panic!("expected element");
        };
        assert_eq!(el.tag, "frame");
        assert_eq!(el.attrs.get("class").map(String::as_str), Some("invoice-widget"));
        assert_eq!(el.children.len(), 1);
        assert_eq!(el.text_content(), "Invoice");
    }

    #[test]
    fn content_expansion_is_plain_data() {
        let registry = Registry::with_builtins();
        let renderer = Renderer::new(&registry);
        let node: WidgetNode = FrameContentProps::new(vec![]).is_expanded(true).into();
        let Output::Element(el) = renderer.render(&node) else {
            panic!("expected element");
        };
        assert_eq!(el.attrs.get("data-expanded").map(String::as_str), Some("true"));
    }
}
