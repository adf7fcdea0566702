#![forbid(unsafe_code)]

//! The widget node tree.
//!
//! [`WidgetNode`] is a closed tagged union over seventeen variants. Every
//! variant carries the [`CommonProps`] bag (`key`, `id`, `testId`,
//! `visible`, `aria`) plus its own fields. Container variants own their
//! children by value; the tree is acyclic by construction and is never
//! mutated by the renderer.
//!
//! Props structs double as builders: `RowProps::new(children).gap(Gap::Lg)`
//! chains setters over construction. Free builder functions with the
//! documented defaults live in `vitrine-build`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::action::Action;
use crate::style::{
    Align, AvatarShape, AvatarSize, ButtonVariant, ControlSize, FontWeight, Gap, GroupPosition,
    IconPosition, Orientation, TextColor, TextSize, TextTag, TimeColor, TimeFormat, TimeSize,
    ToneColor,
};

/// Fields shared by every widget variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonProps {
    /// Stable reconciliation key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Host element id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Test hook id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Absent means visible; `Some(false)` parses fine and renders nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Accessibility attribute name → value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria: Option<BTreeMap<String, String>>,
}

/// Generate the common-field setters and the `WidgetNode` conversion for
/// a props struct.
macro_rules! node_props {
    ($ty:ident => $variant:ident) => {
        impl $ty {
            /// Set the reconciliation key.
            #[must_use]
            pub fn key(mut self, key: impl Into<String>) -> Self {
                self.common.key = Some(key.into());
                self
            }

            /// Set the host element id.
            #[must_use]
            pub fn id(mut self, id: impl Into<String>) -> Self {
                self.common.id = Some(id.into());
                self
            }

            /// Set the test hook id.
            #[must_use]
            pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
                self.common.test_id = Some(test_id.into());
                self
            }

            /// Set explicit visibility.
            #[must_use]
            pub fn visible(mut self, visible: bool) -> Self {
                self.common.visible = Some(visible);
                self
            }

            /// Add one accessibility attribute.
            #[must_use]
            pub fn aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.common
                    .aria
                    .get_or_insert_with(BTreeMap::new)
                    .insert(name.into(), value.into());
                self
            }
        }

        impl From<$ty> for WidgetNode {
            fn from(props: $ty) -> Self {
                WidgetNode::$variant(props)
            }
        }
    };
}

/// Generate a simple `Option` setter.
macro_rules! setter {
    ($(#[$meta:meta])* $name:ident: into String) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(mut self, $name: impl Into<String>) -> Self {
            self.$name = Some($name.into());
            self
        }
    };
    ($(#[$meta:meta])* $name:ident: $ty:ty) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(mut self, $name: $ty) -> Self {
            self.$name = Some($name);
            self
        }
    };
}

// ---------------------------------------------------------------------------
// Layout variants
// ---------------------------------------------------------------------------

/// Top-level card container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl FrameProps {
    #[must_use]
    pub fn new(children: Vec<WidgetNode>) -> Self {
        Self {
            common: CommonProps::default(),
            children,
            class_name: None,
        }
    }

    setter!(
        /// Host styling hook.
        class_name: into String
    );
}
node_props!(FrameProps => Frame);

/// Header strip inside a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameHeaderProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
}

impl FrameHeaderProps {
    #[must_use]
    pub fn new(children: Vec<WidgetNode>) -> Self {
        Self {
            common: CommonProps::default(),
            children,
        }
    }
}
node_props!(FrameHeaderProps => FrameHeader);

/// Title line inside a frame header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTitleProps {
    #[serde(flatten)]
    pub common: CommonProps,
    pub value: String,
}

impl FrameTitleProps {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            common: CommonProps::default(),
            value: value.into(),
        }
    }
}
node_props!(FrameTitleProps => FrameTitle);

/// Action cluster inside a frame header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameActionsProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
}

impl FrameActionsProps {
    #[must_use]
    pub fn new(children: Vec<WidgetNode>) -> Self {
        Self {
            common: CommonProps::default(),
            children,
        }
    }
}
node_props!(FrameActionsProps => FrameActions);

/// Body of a frame. Expansion is externally controlled data, not widget
/// state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameContentProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
}

impl FrameContentProps {
    #[must_use]
    pub fn new(children: Vec<WidgetNode>) -> Self {
        Self {
            common: CommonProps::default(),
            children,
            is_expanded: None,
        }
    }

    setter!(is_expanded: bool);
}
node_props!(FrameContentProps => FrameContent);

/// Horizontal flow container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Gap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
}

impl RowProps {
    #[must_use]
    pub fn new(children: Vec<WidgetNode>) -> Self {
        Self {
            common: CommonProps::default(),
            align: None,
            gap: None,
            wrap: None,
            children,
        }
    }

    setter!(align: Align);
    setter!(gap: Gap);
    setter!(wrap: bool);
}
node_props!(RowProps => Row);

/// Vertical flow container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Gap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
}

impl ColProps {
    #[must_use]
    pub fn new(children: Vec<WidgetNode>) -> Self {
        Self {
            common: CommonProps::default(),
            gap: None,
            align: None,
            children,
        }
    }

    setter!(gap: Gap);
    setter!(align: Align);
}
node_props!(ColProps => Col);

/// Flexible empty space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grow: Option<f64>,
}

impl SpacerProps {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonProps::default(),
            grow: None,
        }
    }

    setter!(grow: f64);
}

impl Default for SpacerProps {
    fn default() -> Self {
        Self::new()
    }
}
node_props!(SpacerProps => Spacer);

/// Rule between sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Gap>,
}

impl DividerProps {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonProps::default(),
            orientation: None,
            spacing: None,
        }
    }

    setter!(orientation: Orientation);
    setter!(spacing: Gap);
}

impl Default for DividerProps {
    fn default() -> Self {
        Self::new()
    }
}
node_props!(DividerProps => Divider);

// ---------------------------------------------------------------------------
// Content variants
// ---------------------------------------------------------------------------

/// A run of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    #[serde(flatten)]
    pub common: CommonProps,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncate: Option<bool>,
    /// Output tag hint (`span` when absent).
    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    pub as_tag: Option<TextTag>,
}

impl TextProps {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            common: CommonProps::default(),
            value: value.into(),
            size: None,
            weight: None,
            color: None,
            emphasis: None,
            truncate: None,
            as_tag: None,
        }
    }

    setter!(size: TextSize);
    setter!(weight: FontWeight);
    setter!(color: TextColor);
    setter!(emphasis: bool);
    setter!(truncate: bool);
    setter!(as_tag: TextTag);
}
node_props!(TextProps => Text);

/// Image-or-initials identity marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<AvatarSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<AvatarShape>,
}

impl AvatarProps {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonProps::default(),
            src: None,
            fallback: None,
            size: None,
            shape: None,
        }
    }

    setter!(src: into String);
    setter!(fallback: into String);
    setter!(size: AvatarSize);
    setter!(shape: AvatarShape);
}

impl Default for AvatarProps {
    fn default() -> Self {
        Self::new()
    }
}
node_props!(AvatarProps => Avatar);

/// A monetary value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountProps {
    #[serde(flatten)]
    pub common: CommonProps,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Absent means show the currency symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_currency: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ToneColor>,
}

impl AmountProps {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            common: CommonProps::default(),
            value,
            currency: None,
            show_currency: None,
            size: None,
            weight: None,
            color: None,
        }
    }

    setter!(currency: into String);
    setter!(show_currency: bool);
    setter!(size: TextSize);
    setter!(weight: FontWeight);
    setter!(color: ToneColor);
}
node_props!(AmountProps => Amount);

/// A timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeProps {
    #[serde(flatten)]
    pub common: CommonProps,
    /// RFC 3339 datetime or `YYYY-MM-DD` date.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TimeFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TimeSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TimeColor>,
}

impl TimeProps {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            common: CommonProps::default(),
            value: value.into(),
            format: None,
            size: None,
            color: None,
        }
    }

    setter!(format: TimeFormat);
    setter!(size: TimeSize);
    setter!(color: TimeColor);
}
node_props!(TimeProps => Time);

// ---------------------------------------------------------------------------
// Interactive variants
// ---------------------------------------------------------------------------

/// An action button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    #[serde(flatten)]
    pub common: CommonProps,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ControlSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_position: Option<IconPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<Action>,
}

impl ButtonProps {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            common: CommonProps::default(),
            label: label.into(),
            variant: None,
            size: None,
            full_width: None,
            disabled: None,
            icon: None,
            icon_position: None,
            on_click_action: None,
        }
    }

    setter!(variant: ButtonVariant);
    setter!(size: ControlSize);
    setter!(full_width: bool);
    setter!(disabled: bool);
    setter!(icon: into String);
    setter!(icon_position: IconPosition);
    setter!(on_click_action: Action);
}
node_props!(ButtonProps => Button);

// ---------------------------------------------------------------------------
// Pattern variants
// ---------------------------------------------------------------------------

/// Serialize a typed collection entry with the `type` tag its wire form
/// carries.
fn serialize_tagged_seq<S, T>(
    tag: &'static str,
    items: &[T],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: Serialize,
{
    #[derive(Serialize)]
    struct Tagged<'a, T: Serialize> {
        #[serde(rename = "type")]
        tag: &'static str,
        #[serde(flatten)]
        props: &'a T,
    }
    serializer.collect_seq(items.iter().map(|props| Tagged { tag, props }))
}

fn serialize_rows<S: serde::Serializer>(
    items: &[KeyValueRowProps],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serialize_tagged_seq("KeyValueRow", items, serializer)
}

fn serialize_buttons<S: serde::Serializer>(
    buttons: &[ButtonProps],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serialize_tagged_seq("Button", buttons, serializer)
}

/// One label/value line. The value may be any widget node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueRowProps {
    #[serde(flatten)]
    pub common: CommonProps,
    pub label: String,
    pub value: Box<WidgetNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<bool>,
}

impl KeyValueRowProps {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<WidgetNode>) -> Self {
        Self {
            common: CommonProps::default(),
            label: label.into(),
            value: Box::new(value.into()),
            emphasis: None,
        }
    }

    setter!(emphasis: bool);
}
node_props!(KeyValueRowProps => KeyValueRow);

/// A stack of key/value rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueListProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(serialize_with = "serialize_rows")]
    pub items: Vec<KeyValueRowProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Gap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividers: Option<bool>,
}

impl KeyValueListProps {
    #[must_use]
    pub fn new(items: Vec<KeyValueRowProps>) -> Self {
        Self {
            common: CommonProps::default(),
            items,
            gap: None,
            dividers: None,
        }
    }

    setter!(gap: Gap);
    setter!(dividers: bool);
}
node_props!(KeyValueListProps => KeyValueList);

/// A cluster of buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonGroupProps {
    #[serde(flatten)]
    pub common: CommonProps,
    #[serde(serialize_with = "serialize_buttons")]
    pub buttons: Vec<ButtonProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<GroupPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Gap>,
}

impl ButtonGroupProps {
    #[must_use]
    pub fn new(buttons: Vec<ButtonProps>) -> Self {
        Self {
            common: CommonProps::default(),
            buttons,
            position: None,
            gap: None,
        }
    }

    setter!(position: GroupPosition);
    setter!(gap: Gap);
}
node_props!(ButtonGroupProps => ButtonGroup);

// ---------------------------------------------------------------------------
// The union
// ---------------------------------------------------------------------------

/// One node of a widget tree.
///
/// The serialized form is internally tagged: the variant name is the wire
/// `type` and the props fields sit beside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum WidgetNode {
    Frame(FrameProps),
    FrameHeader(FrameHeaderProps),
    FrameTitle(FrameTitleProps),
    FrameActions(FrameActionsProps),
    FrameContent(FrameContentProps),
    Row(RowProps),
    Col(ColProps),
    Spacer(SpacerProps),
    Divider(DividerProps),
    Text(TextProps),
    Avatar(AvatarProps),
    Amount(AmountProps),
    Time(TimeProps),
    Button(ButtonProps),
    KeyValueRow(KeyValueRowProps),
    KeyValueList(KeyValueListProps),
    ButtonGroup(ButtonGroupProps),
}

impl WidgetNode {
    /// Wire tags of every known node type, in registry order.
    pub const TYPE_NAMES: &'static [&'static str] = &[
        "Frame",
        "FrameHeader",
        "FrameTitle",
        "FrameActions",
        "FrameContent",
        "Row",
        "Col",
        "Spacer",
        "Divider",
        "Text",
        "Avatar",
        "Amount",
        "Time",
        "Button",
        "KeyValueRow",
        "KeyValueList",
        "ButtonGroup",
    ];

    /// The node's wire `type` tag.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Frame(_) => "Frame",
            Self::FrameHeader(_) => "FrameHeader",
            Self::FrameTitle(_) => "FrameTitle",
            Self::FrameActions(_) => "FrameActions",
            Self::FrameContent(_) => "FrameContent",
            Self::Row(_) => "Row",
            Self::Col(_) => "Col",
            Self::Spacer(_) => "Spacer",
            Self::Divider(_) => "Divider",
            Self::Text(_) => "Text",
            Self::Avatar(_) => "Avatar",
            Self::Amount(_) => "Amount",
            Self::Time(_) => "Time",
            Self::Button(_) => "Button",
            Self::KeyValueRow(_) => "KeyValueRow",
            Self::KeyValueList(_) => "KeyValueList",
            Self::ButtonGroup(_) => "ButtonGroup",
        }
    }

    /// The shared props bag.
    #[must_use]
    pub fn common(&self) -> &CommonProps {
        match self {
            Self::Frame(p) => &p.common,
            Self::FrameHeader(p) => &p.common,
            Self::FrameTitle(p) => &p.common,
            Self::FrameActions(p) => &p.common,
            Self::FrameContent(p) => &p.common,
            Self::Row(p) => &p.common,
            Self::Col(p) => &p.common,
            Self::Spacer(p) => &p.common,
            Self::Divider(p) => &p.common,
            Self::Text(p) => &p.common,
            Self::Avatar(p) => &p.common,
            Self::Amount(p) => &p.common,
            Self::Time(p) => &p.common,
            Self::Button(p) => &p.common,
            Self::KeyValueRow(p) => &p.common,
            Self::KeyValueList(p) => &p.common,
            Self::ButtonGroup(p) => &p.common,
        }
    }

    /// Children of a plain container variant, if this is one.
    ///
    /// `KeyValueList` items and `ButtonGroup` buttons are typed
    /// collections, not generic children, so they are not reported here.
    #[must_use]
    pub fn children(&self) -> Option<&[WidgetNode]> {
        match self {
            Self::Frame(p) => Some(&p.children),
            Self::FrameHeader(p) => Some(&p.children),
            Self::FrameActions(p) => Some(&p.children),
            Self::FrameContent(p) => Some(&p.children),
            Self::Row(p) => Some(&p.children),
            Self::Col(p) => Some(&p.children),
            _ => None,
        }
    }

    /// Whether the node should render. Only an explicit `visible: false`
    /// hides it.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.common().visible != Some(false)
    }

    /// Total node count of this subtree, counting typed collection
    /// entries and nested key/value values.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 1;
        if let Some(children) = self.children() {
            count += children.iter().map(WidgetNode::node_count).sum::<usize>();
        }
        match self {
            Self::KeyValueRow(p) => count += p.value.node_count(),
            Self::KeyValueList(p) => {
                count += p
                    .items
                    .iter()
                    .map(|item| 1 + item.value.node_count())
                    .sum::<usize>();
            }
            Self::ButtonGroup(p) => count += p.buttons.len(),
            _ => {}
        }
        count
    }
}
