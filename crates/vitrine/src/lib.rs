#![forbid(unsafe_code)]

//! Vitrine public facade crate.
//!
//! Re-exports the stable surface of the workspace and offers a
//! lightweight prelude for day-to-day usage: build a widget tree, take
//! one off the wire, render it, and deliver clicks back as actions.
//!
//! ```
//! use vitrine::prelude::*;
//!
//! let card: WidgetNode = frame(vec![
//!     frame_header(vec![frame_title("Receipt").into()]).into(),
//!     key_value_list(vec![KeyValueField::new("Status", "Paid")]).into(),
//! ])
//! .into();
//!
//! let rendered = Renderer::new(builtin_registry()).render(&card);
//! assert!(rendered.as_element().is_some());
//! ```

use std::fmt;

// --- Schema re-exports -----------------------------------------------------

pub use vitrine_schema::format;
pub use vitrine_schema::{
    Action, Align, AmountProps, AvatarProps, AvatarShape, AvatarSize, ButtonGroupProps,
    ButtonProps, ButtonVariant, ColProps, CommonProps, ControlSize, DividerProps, ExpandTarget,
    FontWeight, FrameActionsProps, FrameContentProps, FrameHeaderProps, FrameProps,
    FrameTitleProps, Gap, GroupPosition, IconPosition, KeyValueListProps, KeyValueRowProps,
    Orientation, RowProps, SpacerProps, TextColor, TextProps, TextSize, TextTag, TimeColor,
    TimeFormat, TimeProps, TimeSize, ToneColor, ValidationError, ValidationErrorKind, WidgetNode,
    is_valid_widget, validate_widget,
};

// --- Builder re-exports ----------------------------------------------------

pub use vitrine_build::{
    AccountSnapshotData, FieldValue, InvoiceData, KeyValueField, LimitData, PaymentSummaryData,
    TransactionAggregateData, VirtualCardData, WidgetJsonError, account_snapshot, amount, avatar,
    button, button_group, col, divider, frame, frame_actions, frame_content, frame_header,
    frame_title, from_json, from_value, hydrate_template, invoice, is_validation_enabled,
    key_value_list, key_value_row, limit, maybe_validated, payment_summary, row,
    set_validation_enabled, spacer, text, time, to_json, to_json_compact, transaction_aggregate,
    validated, virtual_card,
};

// --- Renderer re-exports ---------------------------------------------------

pub use vitrine_render::{
    ActionContext, ActionSink, DispatchError, Element, NullSink, Output, Registry, RenderContext,
    RenderError, Renderer, WidgetImpl, activate, builtin_registry, resolve_path,
};

// --- Tool re-exports -------------------------------------------------------

#[cfg(feature = "tools")]
pub use vitrine_tools::{
    Message, Outbound, PendingCall, Role, SessionError, ToolDef, ToolError, ToolExecution,
    ToolResult, ToolSession, VoiceEvent, execute_tool_call, preview_widget, status_label,
    tools_config,
};

/// Top-level error for hosts that want one type across the pipeline.
#[derive(Debug)]
pub enum Error {
    /// A document failed schema validation.
    Validation(ValidationError),
    /// A document failed to parse or validate off the wire.
    Json(WidgetJsonError),
    /// An interaction could not be delivered.
    Dispatch(DispatchError),
    /// A tool call could not execute.
    #[cfg(feature = "tools")]
    Tool(ToolError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::Dispatch(err) => write!(f, "{err}"),
            #[cfg(feature = "tools")]
            Self::Tool(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<WidgetJsonError> for Error {
    fn from(err: WidgetJsonError) -> Self {
        Self::Json(err)
    }
}

impl From<DispatchError> for Error {
    fn from(err: DispatchError) -> Self {
        Self::Dispatch(err)
    }
}

#[cfg(feature = "tools")]
impl From<ToolError> for Error {
    fn from(err: ToolError) -> Self {
        Self::Tool(err)
    }
}

/// The commonly-used surface in one import.
pub mod prelude {
    pub use vitrine_build::{
        KeyValueField, amount, avatar, button, button_group, col, divider, frame, frame_actions,
        frame_content, frame_header, frame_title, from_json, from_value, hydrate_template,
        key_value_list, key_value_row, row, spacer, text, time, to_json,
    };
    pub use vitrine_render::{
        ActionContext, ActionSink, Output, Registry, Renderer, activate, builtin_registry,
    };
    pub use vitrine_schema::{Action, WidgetNode, is_valid_widget, validate_widget};

    #[cfg(feature = "tools")]
    pub use vitrine_tools::{ToolSession, VoiceEvent, execute_tool_call, preview_widget};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_pipeline_smoke() {
        let node = from_json(r#"{"type": "Text", "value": "hi"}"#).unwrap();
        let rendered = Renderer::new(builtin_registry()).render(&node);
        let el = rendered.as_element().unwrap();
        assert_eq!(el.text_content(), "hi");
    }

    #[test]
    fn error_conversions() {
        let err = from_json("{oops").unwrap_err();
        let top: crate::Error = err.into();
        assert!(top.to_string().contains("invalid JSON"));
    }
}
