#![forbid(unsafe_code)]

//! Builtin implementations for the closed node set.

mod button;
mod content;
mod frame;
mod layout;
mod patterns;

pub use button::ButtonWidget;
pub use content::{AmountWidget, AvatarWidget, TextWidget, TimeWidget};
pub use frame::{
    FrameActionsWidget, FrameContentWidget, FrameHeaderWidget, FrameTitleWidget, FrameWidget,
};
pub use layout::{ColWidget, DividerWidget, RowWidget, SpacerWidget};
pub use patterns::{ButtonGroupWidget, KeyValueListWidget, KeyValueRowWidget};

use vitrine_schema::CommonProps;

use crate::output::Element;
use crate::registry::Registry;

/// Register every builtin under its wire tag.
pub fn register_builtins(registry: &mut Registry) {
    registry.register("Frame", FrameWidget);
    registry.register("FrameHeader", FrameHeaderWidget);
    registry.register("FrameTitle", FrameTitleWidget);
    registry.register("FrameActions", FrameActionsWidget);
    registry.register("FrameContent", FrameContentWidget);
    registry.register("Row", RowWidget);
    registry.register("Col", ColWidget);
    registry.register("Spacer", SpacerWidget);
    registry.register("Divider", DividerWidget);
    registry.register("Text", TextWidget);
    registry.register("Avatar", AvatarWidget);
    registry.register("Amount", AmountWidget);
    registry.register("Time", TimeWidget);
    registry.register("Button", ButtonWidget);
    registry.register("KeyValueRow", KeyValueRowWidget);
    registry.register("KeyValueList", KeyValueListWidget);
    registry.register("ButtonGroup", ButtonGroupWidget);
}

/// Map the shared props onto element attributes.
pub(crate) fn apply_common(el: &mut Element, common: &CommonProps) {
    if let Some(key) = &common.key {
        el.set_attr("data-key", key);
    }
    if let Some(id) = &common.id {
        el.set_attr("id", id);
    }
    if let Some(test_id) = &common.test_id {
        el.set_attr("data-testid", test_id);
    }
    if let Some(aria) = &common.aria {
        for (name, value) in aria {
            el.set_attr(format!("aria-{name}"), value);
        }
    }
}
