#![forbid(unsafe_code)]

//! Structural validation of untrusted widget JSON.
//!
//! [`validate_widget`] decodes a `serde_json::Value` into a typed
//! [`WidgetNode`], rejecting anything outside the closed node set. The
//! decoder is written by hand rather than derived so every rejection
//! carries the tree path it happened at and a machine-readable kind.
//!
//! # Invariants
//!
//! 1. An object with no `type` field is an error, never a skipped node.
//! 2. An unknown `type` string is rejected, never passed through.
//! 3. Validation recurses into `children`, `KeyValueRow.value`,
//!    `KeyValueList.items`, `ButtonGroup.buttons`, and
//!    `Button.onClickAction`; malformed nested data cannot survive to
//!    render time.
//! 4. `visible: false` parses successfully; hiding is a render concern.

use serde_json::{Map, Value};

use crate::action::{Action, ExpandTarget};
use crate::node::{
    AmountProps, AvatarProps, ButtonGroupProps, ButtonProps, ColProps, CommonProps, DividerProps,
    FrameActionsProps, FrameContentProps, FrameHeaderProps, FrameProps, FrameTitleProps,
    KeyValueListProps, KeyValueRowProps, RowProps, SpacerProps, TextProps, TimeProps, WidgetNode,
};
use crate::style::{
    Align, AvatarShape, AvatarSize, ButtonVariant, ControlSize, FontWeight, Gap, GroupPosition,
    IconPosition, Orientation, TextColor, TextSize, TextTag, TimeColor, TimeFormat, TimeSize,
    ToneColor,
};

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The value at this path is not a JSON object.
    NotAnObject { found: &'static str },
    /// The `type` tag is not in the known node set.
    UnknownType { found: String },
    /// A required field is absent.
    MissingField { field: &'static str },
    /// A field holds a value of the wrong JSON type.
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// A string field holds a value outside its token set.
    InvalidToken {
        field: &'static str,
        found: String,
        allowed: &'static [&'static str],
    },
    /// A typed collection entry validated as the wrong node type.
    InvalidItem {
        field: &'static str,
        index: usize,
        expected: &'static str,
        found: String,
    },
}

/// A rejection, carrying the path of the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted/bracketed position, e.g. `root.children[2].items[0]`.
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    fn new(path: &str, kind: ValidationErrorKind) -> Self {
        Self {
            path: path.to_string(),
            kind,
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::NotAnObject { found } => {
                write!(f, "{}: expected a widget object, found {found}", self.path)
            }
            ValidationErrorKind::UnknownType { found } => {
                write!(f, "{}: unknown widget type `{found}`", self.path)
            }
            ValidationErrorKind::MissingField { field } => {
                write!(f, "{}: missing required field `{field}`", self.path)
            }
            ValidationErrorKind::WrongType {
                field,
                expected,
                found,
            } => write!(
                f,
                "{}: field `{field}` expected {expected}, found {found}",
                self.path
            ),
            ValidationErrorKind::InvalidToken {
                field,
                found,
                allowed,
            } => write!(
                f,
                "{}: field `{field}` value `{found}` is not one of {allowed:?}",
                self.path
            ),
            ValidationErrorKind::InvalidItem {
                field,
                index,
                expected,
                found,
            } => write!(
                f,
                "{}: `{field}[{index}]` must be a {expected} node, found {found}",
                self.path
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Decode an untrusted value into a typed widget tree.
pub fn validate_widget(value: &Value) -> Result<WidgetNode, ValidationError> {
    validate_at(value, "root")
}

/// Boolean guard over [`validate_widget`]. True iff validation succeeds.
#[must_use]
pub fn is_valid_widget(value: &Value) -> bool {
    validate_widget(value).is_ok()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn validate_at(value: &Value, path: &str) -> Result<WidgetNode, ValidationError> {
    let obj = value.as_object().ok_or_else(|| {
        ValidationError::new(
            path,
            ValidationErrorKind::NotAnObject {
                found: json_type(value),
            },
        )
    })?;

    let tag = match obj.get("type") {
        None => {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::MissingField { field: "type" },
            ));
        }
        Some(Value::String(tag)) => tag.as_str(),
        Some(other) => {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::WrongType {
                    field: "type",
                    expected: "string",
                    found: json_type(other),
                },
            ));
        }
    };

    let common = common_props(obj, path)?;

    let node = match tag {
        "Frame" => WidgetNode::Frame(FrameProps {
            common,
            children: children(obj, path)?,
            class_name: opt_string(obj, "className", path)?,
        }),
        "FrameHeader" => WidgetNode::FrameHeader(FrameHeaderProps {
            common,
            children: children(obj, path)?,
        }),
        "FrameTitle" => WidgetNode::FrameTitle(FrameTitleProps {
            common,
            value: req_string(obj, "value", path)?,
        }),
        "FrameActions" => WidgetNode::FrameActions(FrameActionsProps {
            common,
            children: children(obj, path)?,
        }),
        "FrameContent" => WidgetNode::FrameContent(FrameContentProps {
            common,
            children: children(obj, path)?,
            is_expanded: opt_bool(obj, "isExpanded", path)?,
        }),
        "Row" => WidgetNode::Row(RowProps {
            common,
            align: opt_token(obj, "align", path, Align::parse, Align::ALLOWED)?,
            gap: opt_token(obj, "gap", path, Gap::parse, Gap::ALLOWED)?,
            wrap: opt_bool(obj, "wrap", path)?,
            children: children(obj, path)?,
        }),
        "Col" => WidgetNode::Col(ColProps {
            common,
            gap: opt_token(obj, "gap", path, Gap::parse, Gap::ALLOWED)?,
            align: opt_token(obj, "align", path, Align::parse, Align::ALLOWED)?,
            children: children(obj, path)?,
        }),
        "Spacer" => WidgetNode::Spacer(SpacerProps {
            common,
            grow: opt_f64(obj, "grow", path)?,
        }),
        "Divider" => WidgetNode::Divider(DividerProps {
            common,
            orientation: opt_token(
                obj,
                "orientation",
                path,
                Orientation::parse,
                Orientation::ALLOWED,
            )?,
            spacing: opt_token(obj, "spacing", path, Gap::parse, Gap::ALLOWED)?,
        }),
        "Text" => WidgetNode::Text(TextProps {
            common,
            value: req_string(obj, "value", path)?,
            size: opt_token(obj, "size", path, TextSize::parse, TextSize::ALLOWED)?,
            weight: opt_token(obj, "weight", path, FontWeight::parse, FontWeight::ALLOWED)?,
            color: opt_token(obj, "color", path, TextColor::parse, TextColor::ALLOWED)?,
            emphasis: opt_bool(obj, "emphasis", path)?,
            truncate: opt_bool(obj, "truncate", path)?,
            as_tag: opt_token(obj, "as", path, TextTag::parse, TextTag::ALLOWED)?,
        }),
        "Avatar" => WidgetNode::Avatar(AvatarProps {
            common,
            src: opt_string(obj, "src", path)?,
            fallback: opt_string(obj, "fallback", path)?,
            size: opt_token(obj, "size", path, AvatarSize::parse, AvatarSize::ALLOWED)?,
            shape: opt_token(obj, "shape", path, AvatarShape::parse, AvatarShape::ALLOWED)?,
        }),
        "Amount" => WidgetNode::Amount(AmountProps {
            common,
            value: req_f64(obj, "value", path)?,
            currency: opt_string(obj, "currency", path)?,
            show_currency: opt_bool(obj, "showCurrency", path)?,
            size: opt_token(obj, "size", path, TextSize::parse, TextSize::ALLOWED)?,
            weight: opt_token(obj, "weight", path, FontWeight::parse, FontWeight::ALLOWED)?,
            color: opt_token(obj, "color", path, ToneColor::parse, ToneColor::ALLOWED)?,
        }),
        "Time" => WidgetNode::Time(TimeProps {
            common,
            value: req_string(obj, "value", path)?,
            format: opt_token(obj, "format", path, TimeFormat::parse, TimeFormat::ALLOWED)?,
            size: opt_token(obj, "size", path, TimeSize::parse, TimeSize::ALLOWED)?,
            color: opt_token(obj, "color", path, TimeColor::parse, TimeColor::ALLOWED)?,
        }),
        "Button" => WidgetNode::Button(button_props(obj, common, path)?),
        "KeyValueRow" => WidgetNode::KeyValueRow(key_value_row_props(obj, common, path)?),
        "KeyValueList" => {
            let items_value = obj.get("items").ok_or_else(|| {
                ValidationError::new(path, ValidationErrorKind::MissingField { field: "items" })
            })?;
            let items_array = items_value.as_array().ok_or_else(|| {
                ValidationError::new(
                    path,
                    ValidationErrorKind::WrongType {
                        field: "items",
                        expected: "array",
                        found: json_type(items_value),
                    },
                )
            })?;
            let mut items = Vec::with_capacity(items_array.len());
            for (index, item) in items_array.iter().enumerate() {
                let item_path = format!("{path}.items[{index}]");
                match validate_at(item, &item_path)? {
                    WidgetNode::KeyValueRow(row) => items.push(row),
                    other => {
                        return Err(ValidationError::new(
                            path,
                            ValidationErrorKind::InvalidItem {
                                field: "items",
                                index,
                                expected: "KeyValueRow",
                                found: other.type_name().to_string(),
                            },
                        ));
                    }
                }
            }
            WidgetNode::KeyValueList(KeyValueListProps {
                common,
                items,
                gap: opt_token(obj, "gap", path, Gap::parse, Gap::ALLOWED)?,
                dividers: opt_bool(obj, "dividers", path)?,
            })
        }
        "ButtonGroup" => {
            let buttons_value = obj.get("buttons").ok_or_else(|| {
                ValidationError::new(path, ValidationErrorKind::MissingField { field: "buttons" })
            })?;
            let buttons_array = buttons_value.as_array().ok_or_else(|| {
                ValidationError::new(
                    path,
                    ValidationErrorKind::WrongType {
                        field: "buttons",
                        expected: "array",
                        found: json_type(buttons_value),
                    },
                )
            })?;
            let mut buttons = Vec::with_capacity(buttons_array.len());
            for (index, item) in buttons_array.iter().enumerate() {
                let item_path = format!("{path}.buttons[{index}]");
                match validate_at(item, &item_path)? {
                    WidgetNode::Button(button) => buttons.push(button),
                    other => {
                        return Err(ValidationError::new(
                            path,
                            ValidationErrorKind::InvalidItem {
                                field: "buttons",
                                index,
                                expected: "Button",
                                found: other.type_name().to_string(),
                            },
                        ));
                    }
                }
            }
            WidgetNode::ButtonGroup(ButtonGroupProps {
                common,
                buttons,
                position: opt_token(
                    obj,
                    "position",
                    path,
                    GroupPosition::parse,
                    GroupPosition::ALLOWED,
                )?,
                gap: opt_token(obj, "gap", path, Gap::parse, Gap::ALLOWED)?,
            })
        }
        other => {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::UnknownType {
                    found: other.to_string(),
                },
            ));
        }
    };

    Ok(node)
}

fn button_props(
    obj: &Map<String, Value>,
    common: CommonProps,
    path: &str,
) -> Result<ButtonProps, ValidationError> {
    let on_click_action = match obj.get("onClickAction") {
        None => None,
        Some(value) => Some(validate_action(value, "onClickAction", path)?),
    };
    Ok(ButtonProps {
        common,
        label: req_string(obj, "label", path)?,
        variant: opt_token(
            obj,
            "variant",
            path,
            ButtonVariant::parse,
            ButtonVariant::ALLOWED,
        )?,
        size: opt_token(obj, "size", path, ControlSize::parse, ControlSize::ALLOWED)?,
        full_width: opt_bool(obj, "fullWidth", path)?,
        disabled: opt_bool(obj, "disabled", path)?,
        icon: opt_string(obj, "icon", path)?,
        icon_position: opt_token(
            obj,
            "iconPosition",
            path,
            IconPosition::parse,
            IconPosition::ALLOWED,
        )?,
        on_click_action,
    })
}

fn key_value_row_props(
    obj: &Map<String, Value>,
    common: CommonProps,
    path: &str,
) -> Result<KeyValueRowProps, ValidationError> {
    let value = obj.get("value").ok_or_else(|| {
        ValidationError::new(path, ValidationErrorKind::MissingField { field: "value" })
    })?;
    let value_path = format!("{path}.value");
    Ok(KeyValueRowProps {
        common,
        label: req_string(obj, "label", path)?,
        value: Box::new(validate_at(value, &value_path)?),
        emphasis: opt_bool(obj, "emphasis", path)?,
    })
}

/// Decode the action object stored under `field`.
fn validate_action(
    value: &Value,
    field: &'static str,
    path: &str,
) -> Result<Action, ValidationError> {
    let obj = value.as_object().ok_or_else(|| {
        ValidationError::new(
            path,
            ValidationErrorKind::WrongType {
                field,
                expected: "object",
                found: json_type(value),
            },
        )
    })?;
    let tag = match obj.get("type") {
        Some(Value::String(tag)) => tag.as_str(),
        Some(other) => {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::WrongType {
                    field,
                    expected: "string",
                    found: json_type(other),
                },
            ));
        }
        None => {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::MissingField { field },
            ));
        }
    };

    const ACTION_TAGS: &[&str] = &[
        "approve_tool",
        "reject_tool",
        "expand",
        "navigate",
        "share",
        "download",
        "emit",
    ];

    let action = match tag {
        "approve_tool" => Action::ApproveTool {
            tool_call_id: req_string(obj, "toolCallId", path)?,
        },
        "reject_tool" => Action::RejectTool {
            tool_call_id: req_string(obj, "toolCallId", path)?,
        },
        "expand" => {
            let target = match opt_string(obj, "target", path)? {
                None => None,
                Some(raw) => Some(ExpandTarget::parse(&raw).ok_or_else(|| {
                    ValidationError::new(
                        path,
                        ValidationErrorKind::InvalidToken {
                            field: "target",
                            found: raw,
                            allowed: ExpandTarget::ALLOWED,
                        },
                    )
                })?),
            };
            Action::Expand { target }
        }
        "navigate" => Action::Navigate {
            to: req_string(obj, "to", path)?,
        },
        "share" => Action::Share {
            payload: obj.get("payload").cloned(),
        },
        "download" => Action::Download {
            payload: obj.get("payload").cloned(),
        },
        "emit" => Action::Emit {
            event: req_string(obj, "event", path)?,
            payload: obj.get("payload").cloned(),
        },
        other => {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::InvalidToken {
                    field,
                    found: other.to_string(),
                    allowed: ACTION_TAGS,
                },
            ));
        }
    };
    Ok(action)
}

fn common_props(obj: &Map<String, Value>, path: &str) -> Result<CommonProps, ValidationError> {
    let aria = match obj.get("aria") {
        None => None,
        Some(Value::Object(map)) => {
            let mut out = std::collections::BTreeMap::new();
            for (name, value) in map {
                let Value::String(value) = value else {
                    return Err(ValidationError::new(
                        path,
                        ValidationErrorKind::WrongType {
                            field: "aria",
                            expected: "string values",
                            found: json_type(value),
                        },
                    ));
                };
                out.insert(name.clone(), value.clone());
            }
            Some(out)
        }
        Some(other) => {
            return Err(ValidationError::new(
                path,
                ValidationErrorKind::WrongType {
                    field: "aria",
                    expected: "object",
                    found: json_type(other),
                },
            ));
        }
    };
    Ok(CommonProps {
        key: opt_string(obj, "key", path)?,
        id: opt_string(obj, "id", path)?,
        test_id: opt_string(obj, "testId", path)?,
        visible: opt_bool(obj, "visible", path)?,
        aria,
    })
}

fn children(obj: &Map<String, Value>, path: &str) -> Result<Vec<WidgetNode>, ValidationError> {
    match obj.get("children") {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, child) in items.iter().enumerate() {
                let child_path = format!("{path}.children[{index}]");
                out.push(validate_at(child, &child_path)?);
            }
            Ok(out)
        }
        Some(other) => Err(ValidationError::new(
            path,
            ValidationErrorKind::WrongType {
                field: "children",
                expected: "array",
                found: json_type(other),
            },
        )),
    }
}

fn req_string(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<String, ValidationError> {
    match obj.get(field) {
        None => Err(ValidationError::new(
            path,
            ValidationErrorKind::MissingField { field },
        )),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::new(
            path,
            ValidationErrorKind::WrongType {
                field,
                expected: "string",
                found: json_type(other),
            },
        )),
    }
}

fn opt_string(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<Option<String>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ValidationError::new(
            path,
            ValidationErrorKind::WrongType {
                field,
                expected: "string",
                found: json_type(other),
            },
        )),
    }
}

fn req_f64(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<f64, ValidationError> {
    match obj.get(field) {
        None => Err(ValidationError::new(
            path,
            ValidationErrorKind::MissingField { field },
        )),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            ValidationError::new(
                path,
                ValidationErrorKind::WrongType {
                    field,
                    expected: "finite number",
                    found: "number",
                },
            )
        }),
        Some(other) => Err(ValidationError::new(
            path,
            ValidationErrorKind::WrongType {
                field,
                expected: "number",
                found: json_type(other),
            },
        )),
    }
}

fn opt_f64(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<Option<f64>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        Some(_) => req_f64(obj, field, path).map(Some),
    }
}

fn opt_bool(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<Option<bool>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ValidationError::new(
            path,
            ValidationErrorKind::WrongType {
                field,
                expected: "boolean",
                found: json_type(other),
            },
        )),
    }
}

fn opt_token<T>(
    obj: &Map<String, Value>,
    field: &'static str,
    path: &str,
    parse: impl Fn(&str) -> Option<T>,
    allowed: &'static [&'static str],
) -> Result<Option<T>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        Some(Value::String(raw)) => match parse(raw) {
            Some(token) => Ok(Some(token)),
            None => Err(ValidationError::new(
                path,
                ValidationErrorKind::InvalidToken {
                    field,
                    found: raw.clone(),
                    allowed,
                },
            )),
        },
        Some(other) => Err(ValidationError::new(
            path,
            ValidationErrorKind::WrongType {
                field,
                expected: "string",
                found: json_type(other),
            },
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_type_is_an_error() {
        let err = validate_widget(&json!({"value": "hi"})).unwrap_err();
        assert_eq!(err.path, "root");
        assert_eq!(err.kind, ValidationErrorKind::MissingField { field: "type" });
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = validate_widget(&json!({"type": "Bogus"})).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::UnknownType {
                found: "Bogus".into()
            }
        );
    }

    #[test]
    fn non_object_is_rejected() {
        let err = validate_widget(&json!(["Frame"])).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NotAnObject { found: "array" });
    }

    #[test]
    fn wrong_field_type_reports_field() {
        let err = validate_widget(&json!({"type": "Amount", "value": "150"})).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::WrongType {
                field: "value",
                expected: "number",
                found: "string"
            }
        );
    }

    #[test]
    fn invalid_token_lists_allowed_set() {
        let err =
            validate_widget(&json!({"type": "Row", "gap": "huge", "children": []})).unwrap_err();
        match err.kind {
            ValidationErrorKind::InvalidToken { field, found, allowed } => {
                assert_eq!(field, "gap");
                assert_eq!(found, "huge");
                assert_eq!(allowed, Gap::ALLOWED);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn nested_child_errors_carry_paths() {
        let doc = json!({
            "type": "Frame",
            "children": [
                {"type": "Text", "value": "ok"},
                {"type": "Col", "children": [{"type": "Nope"}]}
            ]
        });
        let err = validate_widget(&doc).unwrap_err();
        assert_eq!(err.path, "root.children[1].children[0]");
    }

    #[test]
    fn key_value_list_items_must_be_rows() {
        let doc = json!({
            "type": "KeyValueList",
            "items": [{"type": "Text", "value": "not a row"}]
        });
        let err = validate_widget(&doc).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::InvalidItem {
                field: "items",
                index: 0,
                expected: "KeyValueRow",
                found: "Text".into()
            }
        );
    }

    #[test]
    fn key_value_row_value_may_be_any_node() {
        let doc = json!({
            "type": "KeyValueRow",
            "label": "Total",
            "value": {"type": "Amount", "value": 12500.0, "currency": "USD"}
        });
        let node = validate_widget(&doc).unwrap();
        let WidgetNode::KeyValueRow(row) = node else {
            panic!("expected KeyValueRow");
        };
        assert!(matches!(*row.value, WidgetNode::Amount(_)));
    }

    #[test]
    fn visible_false_parses() {
        let node = validate_widget(&json!({"type": "Spacer", "visible": false})).unwrap();
        assert!(!node.is_visible());
    }

    #[test]
    fn button_action_round_trips() {
        let doc = json!({
            "type": "Button",
            "label": "Approve",
            "onClickAction": {"type": "approve_tool", "toolCallId": "call_1"}
        });
        let WidgetNode::Button(button) = validate_widget(&doc).unwrap() else {
            panic!("expected Button");
        };
        assert_eq!(
            button.on_click_action,
            Some(Action::ApproveTool {
                tool_call_id: "call_1".into()
            })
        );
    }

    #[test]
    fn bad_action_tag_is_rejected() {
        let doc = json!({
            "type": "Button",
            "label": "x",
            "onClickAction": {"type": "explode"}
        });
        assert!(validate_widget(&doc).is_err());
    }

    #[test]
    fn aria_values_must_be_strings() {
        let doc = json!({"type": "Text", "value": "hi", "aria": {"label": 3}});
        assert!(validate_widget(&doc).is_err());
        let doc = json!({"type": "Text", "value": "hi", "aria": {"label": "greeting"}});
        let node = validate_widget(&doc).unwrap();
        assert_eq!(
            node.common().aria.as_ref().and_then(|a| a.get("label")),
            Some(&"greeting".to_string())
        );
    }

    #[test]
    fn guard_agrees_with_validator() {
        let good = json!({"type": "Text", "value": "hi"});
        let bad = json!({"type": "Text"});
        assert_eq!(is_valid_widget(&good), validate_widget(&good).is_ok());
        assert_eq!(is_valid_widget(&bad), validate_widget(&bad).is_ok());
        assert!(is_valid_widget(&good));
        assert!(!is_valid_widget(&bad));
    }
}
