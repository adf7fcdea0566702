#![forbid(unsafe_code)]

//! Node model, actions, validation, and display formatting for Vitrine.
//!
//! A widget document is a tree of [`WidgetNode`] values — a closed tagged
//! union whose serialized form is an internally tagged JSON object
//! (`{"type": "Frame", ...}`). Trees are immutable data: they are built
//! once (by the `vitrine-build` builders or by validating an external
//! JSON payload), rendered any number of times, and replaced rather than
//! mutated.
//!
//! # Invariants
//!
//! 1. A node's `type` tag uniquely determines the shape of its remaining
//!    fields. [`validate_widget`](validate::validate_widget) rejects any
//!    object whose tag is outside the known set and any field whose value
//!    does not match the variant's declared shape.
//! 2. Optional fields that are absent stay absent (`None`); defaults are
//!    applied by builders at construction time and by renderers at render
//!    time, never by the validator. This keeps serialization lossless.
//! 3. `visible: false` is a first-class parsed state, distinct from an
//!    absent `visible` field.

pub mod action;
pub mod format;
pub mod node;
pub mod style;
pub mod validate;

pub use action::{Action, ExpandTarget};
pub use node::{
    AmountProps, AvatarProps, ButtonGroupProps, ButtonProps, ColProps, CommonProps, DividerProps,
    FrameActionsProps, FrameContentProps, FrameHeaderProps, FrameProps, FrameTitleProps,
    KeyValueListProps, KeyValueRowProps, RowProps, SpacerProps, TextProps, TimeProps, WidgetNode,
};
pub use style::{
    Align, AvatarShape, AvatarSize, ButtonVariant, ControlSize, FontWeight, Gap, GroupPosition,
    IconPosition, Orientation, TextColor, TextSize, TextTag, TimeColor, TimeFormat, TimeSize,
    ToneColor,
};
pub use validate::{ValidationError, ValidationErrorKind, is_valid_widget, validate_widget};
