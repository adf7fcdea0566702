#![forbid(unsafe_code)]

//! Row, Col, Spacer, and Divider.
//!
//! Render-time defaults: `Row` gets `gap: md, align: start`, `Col` gets
//! `gap: md, align: start`, `Spacer` grows by 1, `Divider` is a
//! horizontal rule with `spacing: md`. A field that was absent in the
//! document picks up its default here, not in the validator.

use vitrine_schema::{Align, Gap, Orientation, WidgetNode};

use super::apply_common;
use crate::output::{Element, Output};
use crate::registry::{RenderError, WidgetImpl};
use crate::renderer::RenderContext;

pub struct RowWidget;

impl WidgetImpl for RowWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Row(props) = node else {
            return Err(RenderError::wrong_node("Row", node.type_name()));
        };
        let mut el = Element::new("row");
        apply_common(&mut el, &props.common);
        el.set_attr("data-gap", props.gap.unwrap_or(Gap::Md).as_str());
        el.set_attr("data-align", props.align.unwrap_or(Align::Start).as_str());
        if props.wrap == Some(true) {
            el.set_attr("data-wrap", "true");
        }
        for (index, child) in props.children.iter().enumerate() {
            el.push(ctx.child(child, index));
        }
        Ok(el.into())
    }
}

pub struct ColWidget;

impl WidgetImpl for ColWidget {
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Col(props) = node else {
            return Err(RenderError::wrong_node("Col", node.type_name()));
        };
        let mut el = Element::new("col");
        apply_common(&mut el, &props.common);
        el.set_attr("data-gap", props.gap.unwrap_or(Gap::Md).as_str());
        el.set_attr("data-align", props.align.unwrap_or(Align::Start).as_str());
        for (index, child) in props.children.iter().enumerate() {
            el.push(ctx.child(child, index));
        }
        Ok(el.into())
    }
}

pub struct SpacerWidget;

impl WidgetImpl for SpacerWidget {
    fn render(&self, node: &WidgetNode, _ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Spacer(props) = node else {
            return Err(RenderError::wrong_node("Spacer", node.type_name()));
        };
        let mut el = Element::new("spacer");
        apply_common(&mut el, &props.common);
        let grow = props.grow.unwrap_or(1.0);
        el.set_attr("data-grow", trim_float(grow));
        Ok(el.into())
    }
}

pub struct DividerWidget;

impl WidgetImpl for DividerWidget {
    fn render(&self, node: &WidgetNode, _ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Divider(props) = node else {
            return Err(RenderError::wrong_node("Divider", node.type_name()));
        };
        let mut el = Element::new("divider");
        apply_common(&mut el, &props.common);
        el.set_attr(
            "data-orientation",
            props.orientation.unwrap_or(Orientation::Horizontal).as_str(),
        );
        el.set_attr("data-spacing", props.spacing.unwrap_or(Gap::Md).as_str());
        Ok(el.into())
    }
}

/// `1` instead of `1.0` for whole grow factors.
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
