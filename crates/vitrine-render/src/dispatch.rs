#![forbid(unsafe_code)]

//! Host-side event delivery.
//!
//! The renderer stamps interactive elements with their tree path; when
//! the host UI reports a click it hands that path to [`activate`], which
//! walks back to the node, extracts its action, and dispatches it with
//! full context. [`resolve_path`] is the underlying walk, usable on its
//! own.
//!
//! Path grammar: `root` followed by `.children[i]`, `.items[i]`,
//! `.buttons[i]`, or `.value` segments — exactly the segments the
//! renderer emits.

use vitrine_schema::WidgetNode;

use crate::renderer::{ActionContext, ActionSink};

/// Why an activation did not dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The path does not resolve to a node in this tree.
    NoSuchPath { path: String },
    /// The node at the path is not an interactive type.
    NotInteractive {
        path: String,
        type_name: &'static str,
    },
    /// The button at the path is disabled.
    Disabled { path: String },
    /// The button at the path has no `onClickAction`.
    NoAction { path: String },
}

impl core::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoSuchPath { path } => write!(f, "no node at path `{path}`"),
            Self::NotInteractive { path, type_name } => {
                write!(f, "node at `{path}` is a {type_name}, not interactive")
            }
            Self::Disabled { path } => write!(f, "button at `{path}` is disabled"),
            Self::NoAction { path } => write!(f, "button at `{path}` has no action"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Resolve a renderer path back to the node it addressed.
///
/// Typed collection entries (`items[i]`, `buttons[i]`) come back wrapped
/// in their node variant. Returns `None` for malformed paths and paths
/// that walk off the tree.
#[must_use]
pub fn resolve_path(root: &WidgetNode, path: &str) -> Option<WidgetNode> {
    let mut segments = path.split('.');
    if segments.next() != Some("root") {
        return None;
    }

    let mut current = root.clone();
    for segment in segments {
        current = step(&current, segment)?;
    }
    Some(current)
}

fn step(node: &WidgetNode, segment: &str) -> Option<WidgetNode> {
    let (name, index) = split_segment(segment)?;
    match (name, index) {
        ("children", Some(index)) => node.children()?.get(index).cloned(),
        ("items", Some(index)) => {
            let WidgetNode::KeyValueList(props) = node else {
                return None;
            };
            props
                .items
                .get(index)
                .cloned()
                .map(WidgetNode::KeyValueRow)
        }
        ("buttons", Some(index)) => {
            let WidgetNode::ButtonGroup(props) = node else {
                return None;
            };
            props.buttons.get(index).cloned().map(WidgetNode::Button)
        }
        ("value", None) => {
            let WidgetNode::KeyValueRow(props) = node else {
                return None;
            };
            Some((*props.value).clone())
        }
        _ => None,
    }
}

/// Split `children[3]` into `("children", Some(3))` and `value` into
/// `("value", None)`.
fn split_segment(segment: &str) -> Option<(&str, Option<usize>)> {
    match segment.find('[') {
        None => Some((segment, None)),
        Some(open) => {
            let close = segment.len().checked_sub(1)?;
            if segment.as_bytes().get(close) != Some(&b']') {
                return None;
            }
            let index: usize = segment.get(open + 1..close)?.parse().ok()?;
            Some((segment.get(..open)?, Some(index)))
        }
    }
}

/// Deliver a click at `path`: resolve the node, pull its action, and
/// dispatch through `sink` with the node and path as context.
pub fn activate(
    root: &WidgetNode,
    path: &str,
    sink: &dyn ActionSink,
) -> Result<(), DispatchError> {
    let node = resolve_path(root, path).ok_or_else(|| DispatchError::NoSuchPath {
        path: path.to_string(),
    })?;

    let WidgetNode::Button(props) = &node else {
        return Err(DispatchError::NotInteractive {
            path: path.to_string(),
            type_name: node.type_name(),
        });
    };
    if props.disabled == Some(true) {
        return Err(DispatchError::Disabled {
            path: path.to_string(),
        });
    }
    let Some(action) = &props.on_click_action else {
        return Err(DispatchError::NoAction {
            path: path.to_string(),
        });
    };

    sink.dispatch(action, ActionContext { node: &node, path });
    Ok(())
}
