#![forbid(unsafe_code)]

//! Composition patterns over the primitives.

use vitrine_schema::{
    ButtonGroupProps, ButtonProps, FontWeight, Gap, GroupPosition, KeyValueListProps,
    KeyValueRowProps, TextColor, WidgetNode,
};

use crate::primitives::text;

/// A value cell for a key/value row: bare text, a bare number, or any
/// pre-built node.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Num(f64),
    Node(WidgetNode),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Num(value as f64)
    }
}

impl From<WidgetNode> for FieldValue {
    fn from(value: WidgetNode) -> Self {
        Self::Node(value)
    }
}

/// Let any props struct be used directly as a field value.
macro_rules! field_from_props {
    ($($ty:ident),+ $(,)?) => {
        $(impl From<vitrine_schema::$ty> for FieldValue {
            fn from(props: vitrine_schema::$ty) -> Self {
                Self::Node(props.into())
            }
        })+
    };
}

field_from_props!(
    FrameProps,
    FrameHeaderProps,
    FrameTitleProps,
    FrameActionsProps,
    FrameContentProps,
    RowProps,
    ColProps,
    SpacerProps,
    DividerProps,
    TextProps,
    AvatarProps,
    AmountProps,
    TimeProps,
    ButtonProps,
    KeyValueRowProps,
    KeyValueListProps,
    ButtonGroupProps,
);

/// A plain label/value record accepted by [`key_value_list`].
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueField {
    pub label: String,
    pub value: FieldValue,
    pub emphasis: Option<bool>,
}

impl KeyValueField {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            emphasis: None,
        }
    }

    #[must_use]
    pub fn emphasis(mut self, emphasis: bool) -> Self {
        self.emphasis = Some(emphasis);
        self
    }
}

impl From<KeyValueField> for KeyValueRowProps {
    fn from(field: KeyValueField) -> Self {
        let mut row = key_value_row(field.label, field.value);
        if let Some(emphasis) = field.emphasis {
            row = row.emphasis(emphasis);
        }
        row
    }
}

/// Build one key/value row.
///
/// Bare strings and numbers are wrapped in a bold, emphasis-colored
/// `Text` node; an already-built node passes through unchanged.
#[must_use]
pub fn key_value_row(label: impl Into<String>, value: impl Into<FieldValue>) -> KeyValueRowProps {
    let value_node: WidgetNode = match value.into() {
        FieldValue::Str(s) => text(s)
            .weight(FontWeight::Bold)
            .color(TextColor::Emphasis)
            .into(),
        FieldValue::Num(n) => text(display_number(n))
            .weight(FontWeight::Bold)
            .color(TextColor::Emphasis)
            .into(),
        FieldValue::Node(node) => node,
    };
    KeyValueRowProps::new(label, value_node)
}

/// Build a key/value list from fields or pre-built rows.
/// Defaults `gap: md, dividers: true`.
#[must_use]
pub fn key_value_list<I>(items: I) -> KeyValueListProps
where
    I: IntoIterator,
    I::Item: Into<KeyValueRowProps>,
{
    let rows = items.into_iter().map(Into::into).collect();
    KeyValueListProps::new(rows).gap(Gap::Md).dividers(true)
}

/// Build a button group. Defaults `gap: md, position: static`.
#[must_use]
pub fn button_group(buttons: Vec<ButtonProps>) -> ButtonGroupProps {
    ButtonGroupProps::new(buttons)
        .gap(Gap::Md)
        .position(GroupPosition::Static)
}

/// Integers print without a trailing `.0`; everything else prints as-is.
fn display_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_schema::validate_widget;

    #[test]
    fn bare_string_wraps_into_emphasized_text() {
        let row = key_value_row("A", "B");
        assert_eq!(row.label, "A");
        let WidgetNode::Text(text) = row.value.as_ref() else {
            panic!("expected wrapped Text value");
        };
        assert_eq!(text.value, "B");
        assert_eq!(text.weight, Some(FontWeight::Bold));
        assert_eq!(text.color, Some(TextColor::Emphasis));
    }

    #[test]
    fn bare_number_wraps_and_drops_trailing_zero() {
        let row = key_value_row("Count", 14i64);
        let WidgetNode::Text(text) = row.value.as_ref() else {
            panic!("expected wrapped Text value");
        };
        assert_eq!(text.value, "14");
    }

    #[test]
    fn prebuilt_node_passes_through() {
        let node: WidgetNode = crate::primitives::amount(5000.0).currency("USD").into();
        let row = key_value_row("Total", node.clone());
        assert_eq!(row.value.as_ref(), &node);
    }

    #[test]
    fn list_normalizes_fields_and_rows() {
        let list = key_value_list(vec![
            KeyValueField::new("A", "B"),
            KeyValueField::new("C", 7i64).emphasis(true),
        ]);
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.gap, Some(Gap::Md));
        assert_eq!(list.dividers, Some(true));
        assert_eq!(list.items[1].emphasis, Some(true));

        let prebuilt = key_value_list(vec![
            key_value_row("X", "1"),
            key_value_row("Y", "2"),
        ]);
        assert_eq!(prebuilt.items.len(), 2);
    }

    #[test]
    fn list_output_validates() {
        let node: WidgetNode = key_value_list(vec![KeyValueField::new("A", "B")]).into();
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(validate_widget(&value).unwrap(), node);
    }

    #[test]
    fn group_defaults() {
        let group = button_group(vec![crate::primitives::button("Ok")]);
        assert_eq!(group.gap, Some(Gap::Md));
        assert_eq!(group.position, Some(GroupPosition::Static));
    }
}
