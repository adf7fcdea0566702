#![forbid(unsafe_code)]

//! Primitive node builders.
//!
//! Each function constructs one node type with its documented defaults
//! already applied; everything else is reachable through the props
//! setters. None of these validate — wrap a build in
//! [`validated`](crate::validated::validated) when the input is not
//! trusted.

use vitrine_schema::{
    Align, AmountProps, AvatarProps, AvatarShape, AvatarSize, ButtonProps, ButtonVariant, ColProps,
    ControlSize, DividerProps, FrameActionsProps, FrameContentProps, FrameHeaderProps, FrameProps,
    FrameTitleProps, Gap, Orientation, RowProps, SpacerProps, TextProps, TimeFormat, TimeProps,
    WidgetNode,
};

/// Top-level card container. No defaults.
#[must_use]
pub fn frame(children: Vec<WidgetNode>) -> FrameProps {
    FrameProps::new(children)
}

/// Frame header strip.
#[must_use]
pub fn frame_header(children: Vec<WidgetNode>) -> FrameHeaderProps {
    FrameHeaderProps::new(children)
}

/// Frame title line.
#[must_use]
pub fn frame_title(value: impl Into<String>) -> FrameTitleProps {
    FrameTitleProps::new(value)
}

/// Frame header action cluster.
#[must_use]
pub fn frame_actions(children: Vec<WidgetNode>) -> FrameActionsProps {
    FrameActionsProps::new(children)
}

/// Frame body.
#[must_use]
pub fn frame_content(children: Vec<WidgetNode>) -> FrameContentProps {
    FrameContentProps::new(children)
}

/// Horizontal container. Defaults `gap: md, align: start`.
#[must_use]
pub fn row(children: Vec<WidgetNode>) -> RowProps {
    RowProps::new(children).gap(Gap::Md).align(Align::Start)
}

/// Vertical container. Defaults `gap: md`.
#[must_use]
pub fn col(children: Vec<WidgetNode>) -> ColProps {
    ColProps::new(children).gap(Gap::Md)
}

/// Flexible space. Defaults `grow: 1`.
#[must_use]
pub fn spacer() -> SpacerProps {
    SpacerProps::new().grow(1.0)
}

/// Section rule. Defaults `orientation: horizontal, spacing: md`.
#[must_use]
pub fn divider() -> DividerProps {
    DividerProps::new()
        .orientation(Orientation::Horizontal)
        .spacing(Gap::Md)
}

/// Text run. No defaults.
#[must_use]
pub fn text(value: impl Into<String>) -> TextProps {
    TextProps::new(value)
}

/// Avatar. Defaults `size: md, shape: circle`.
#[must_use]
pub fn avatar() -> AvatarProps {
    AvatarProps::new().size(AvatarSize::Md).shape(AvatarShape::Circle)
}

/// Monetary value. No defaults.
#[must_use]
pub fn amount(value: f64) -> AmountProps {
    AmountProps::new(value)
}

/// Timestamp. Defaults `format: relative`.
#[must_use]
pub fn time(value: impl Into<String>) -> TimeProps {
    TimeProps::new(value).format(TimeFormat::Relative)
}

/// Action button. Defaults `variant: outline, size: md`.
#[must_use]
pub fn button(label: impl Into<String>) -> ButtonProps {
    ButtonProps::new(label)
        .variant(ButtonVariant::Outline)
        .size(ControlSize::Md)
}
