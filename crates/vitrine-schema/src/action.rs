#![forbid(unsafe_code)]

//! User-intent actions emitted by interactive nodes.
//!
//! Actions are values, not side effects: an interactive node produces an
//! [`Action`] and hands it to the host through the renderer's action
//! sink. What `navigate` or `download` actually does is entirely the
//! host's business — the engine's contract ends at "produced an action
//! with the correct payload shape".

use serde::Serialize;
use serde_json::Value;

/// Where an `expand` action wants the widget to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpandTarget {
    Fullscreen,
    Modal,
}

impl ExpandTarget {
    pub const ALLOWED: &'static [&'static str] = &["fullscreen", "modal"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Modal => "modal",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fullscreen" => Some(Self::Fullscreen),
            "modal" => Some(Self::Modal),
            _ => None,
        }
    }
}

impl serde::Serialize for ExpandTarget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Closed set of user intents a widget can emit.
///
/// Wire form is internally tagged with snake_case tags and camelCase
/// payload fields, e.g. `{"type": "approve_tool", "toolCallId": "c_1"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Action {
    /// Approve a pending tool call.
    ApproveTool { tool_call_id: String },
    /// Reject a pending tool call.
    RejectTool { tool_call_id: String },
    /// Expand the widget into a larger surface.
    Expand {
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<ExpandTarget>,
    },
    /// Navigate the host to a destination.
    Navigate { to: String },
    /// Share the widget's underlying data.
    Share {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    /// Download the widget's underlying data.
    Download {
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    /// Emit a host-defined event.
    Emit {
        event: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
}

impl Action {
    /// The action's wire tag.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::ApproveTool { .. } => "approve_tool",
            Self::RejectTool { .. } => "reject_tool",
            Self::Expand { .. } => "expand",
            Self::Navigate { .. } => "navigate",
            Self::Share { .. } => "share",
            Self::Download { .. } => "download",
            Self::Emit { .. } => "emit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_wire_shape() {
        let action = Action::ApproveTool {
            tool_call_id: "call_7".into(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "approve_tool", "toolCallId": "call_7"})
        );
    }

    #[test]
    fn expand_omits_absent_target() {
        let json = serde_json::to_value(Action::Expand { target: None }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "expand"}));
        let json = serde_json::to_value(Action::Expand {
            target: Some(ExpandTarget::Modal),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"type": "expand", "target": "modal"}));
    }
}
