#![forbid(unsafe_code)]

//! Mapping from node type tag to renderer implementation.
//!
//! A [`Registry`] is an owned value: build one, register implementations,
//! hand it to a [`Renderer`](crate::renderer::Renderer). Registration is
//! last-wins, so a host can override a builtin by re-registering its tag.
//!
//! [`builtin_registry`] is the process-wide instance most hosts want:
//! populated once, on first use, with the full builtin set, and never
//! mutated afterwards.

use std::sync::OnceLock;

use ahash::AHashMap;
use vitrine_schema::WidgetNode;

use crate::output::Output;
use crate::renderer::RenderContext;

/// Why an implementation refused to render a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    /// Type tag of the implementation that failed.
    pub widget: &'static str,
    pub detail: String,
}

impl RenderError {
    #[must_use]
    pub fn new(widget: &'static str, detail: impl Into<String>) -> Self {
        Self {
            widget,
            detail: detail.into(),
        }
    }

    /// The node handed to this implementation has a different type tag.
    #[must_use]
    pub fn wrong_node(expected: &'static str, found: &'static str) -> Self {
        Self::new(expected, format!("expected a {expected} node, got {found}"))
    }
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.widget, self.detail)
    }
}

impl std::error::Error for RenderError {}

/// A renderer implementation for one node type.
pub trait WidgetImpl: Send + Sync {
    /// Produce output for `node`. The context carries the node's path,
    /// the action sink, and the recursive re-entry for children.
    fn render(&self, node: &WidgetNode, ctx: &RenderContext<'_>) -> Result<Output, RenderError>;
}

/// Registry of widget implementations, keyed by type tag.
#[derive(Default)]
pub struct Registry {
    map: AHashMap<&'static str, Box<dyn WidgetImpl>>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with every builtin primitive.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::primitives::register_builtins(&mut registry);
        registry
    }

    /// Register an implementation for a type tag. Last registration wins.
    pub fn register(&mut self, tag: &'static str, implementation: impl WidgetImpl + 'static) {
        self.map.insert(tag, Box::new(implementation));
    }

    /// Remove a registration.
    pub fn unregister(&mut self, tag: &str) -> bool {
        self.map.remove(tag).is_some()
    }

    /// Look up the implementation for a tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&dyn WidgetImpl> {
        self.map.get(tag).map(Box::as_ref)
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.map.contains_key(tag)
    }

    /// Number of registered implementations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over registered tags.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.keys().copied()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut tags: Vec<_> = self.map.keys().collect();
        tags.sort_unstable();
        f.debug_struct("Registry").field("tags", &tags).finish()
    }
}

/// The process-wide builtin registry: populated on first use, read-only
/// afterwards.
#[must_use]
pub fn builtin_registry() -> &'static Registry {
    static BUILTIN: OnceLock<Registry> = OnceLock::new();
    BUILTIN.get_or_init(Registry::with_builtins)
}
