#![forbid(unsafe_code)]

//! Registry-driven rendering of widget trees.
//!
//! The renderer walks a validated [`WidgetNode`](vitrine_schema::WidgetNode)
//! tree, looks up each node's implementation in a [`Registry`], and
//! produces an [`Output`] tree the host maps onto its real UI. Three
//! things are threaded through the walk: the node's path (a stable
//! dotted/bracketed address like `root.children[2].items[0]`), the
//! host's [`ActionSink`], and a bound recursive re-entry so container
//! implementations can render their children without knowing renderer
//! internals.
//!
//! # Failure semantics
//!
//! Rendering never takes down the tree. An unregistered type renders an
//! inline `unknown-widget` fallback; an implementation error renders an
//! inert `widget-error` placeholder for that subtree only. Validation
//! failures belong upstream — by the time a tree reaches the renderer it
//! is typed, so the only malformed thing left to defend against is a
//! registry that does not cover the node set.

pub mod dispatch;
pub mod output;
pub mod primitives;
pub mod registry;
pub mod renderer;

pub use dispatch::{DispatchError, activate, resolve_path};
pub use output::{Element, Output};
pub use registry::{Registry, RenderError, WidgetImpl, builtin_registry};
pub use renderer::{ActionContext, ActionSink, NullSink, RenderContext, Renderer};
