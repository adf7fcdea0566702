#![forbid(unsafe_code)]

//! The host-agnostic output tree.
//!
//! A render pass produces [`Output`] values: semantic elements with an
//! attribute map, optional click bindings, and children. The host shell
//! decides what an element tag means on its surface — DOM nodes, native
//! views, test snapshots. The tree serializes, so it can also cross a
//! process boundary.

use std::collections::BTreeMap;

use serde::Serialize;
use vitrine_schema::Action;

/// One rendered node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    /// An invisible or skipped node. Hosts render nothing.
    Empty,
    /// A run of plain text.
    Text { value: String },
    /// A semantic element.
    Element(Element),
}

impl Output {
    /// Shorthand for a text output.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The element, if this output is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// A semantic element: tag, attributes, optional click binding, children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// The action this element fires when the host reports a click on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Output>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: BTreeMap::new(),
            action: None,
            children: Vec::new(),
        }
    }

    /// Set one attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Attach a click binding.
    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Append one child, dropping empties.
    #[must_use]
    pub fn child(mut self, child: Output) -> Self {
        self.push(child);
        self
    }

    /// Append one child in place, dropping empties.
    pub fn push(&mut self, child: Output) {
        if !child.is_empty() {
            self.children.push(child);
        }
    }

    /// In-place attribute setter for the non-chaining call sites.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Concatenated text content of the subtree, for assertions and
    /// plain-text fallbacks.
    #[must_use]
    pub fn text_content(&self) -> String {
        fn collect(output: &Output, out: &mut String) {
            match output {
                Output::Empty => {}
                Output::Text { value } => out.push_str(value),
                Output::Element(el) => {
                    for child in &el.children {
                        collect(child, out);
                    }
                }
            }
        }
        let mut out = String::new();
        for child in &self.children {
            collect(child, &mut out);
        }
        out
    }
}

impl From<Element> for Output {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}
