#![forbid(unsafe_code)]

//! The tree-walking renderer.

use tracing::{debug_span, warn};
use vitrine_schema::{Action, WidgetNode};

use crate::output::{Element, Output};
use crate::registry::Registry;

/// Which widget instance fired an action. The same tree may be rendered
/// in several places at once, so the path disambiguates.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    pub node: &'a WidgetNode,
    pub path: &'a str,
}

/// Host-supplied receiver for widget actions.
///
/// Interactive nodes never execute side effects; they hand an
/// [`Action`] value to the sink and the host decides what it means.
pub trait ActionSink {
    fn dispatch(&self, action: &Action, ctx: ActionContext<'_>);
}

/// A sink that ignores every action.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ActionSink for NullSink {
    fn dispatch(&self, _action: &Action, _ctx: ActionContext<'_>) {}
}

static NULL_SINK: NullSink = NullSink;

/// Everything an implementation gets from the renderer: its path, the
/// sink, and the bound recursive re-entry.
pub struct RenderContext<'a> {
    registry: &'a Registry,
    sink: &'a dyn ActionSink,
    path: &'a str,
}

impl RenderContext<'_> {
    /// This node's position in the tree.
    #[must_use]
    pub fn path(&self) -> &str {
        self.path
    }

    /// Render a generic child at `path.children[index]`.
    #[must_use]
    pub fn child(&self, node: &WidgetNode, index: usize) -> Output {
        let path = format!("{}.children[{index}]", self.path);
        render_at(self.registry, self.sink, node, &path)
    }

    /// Render a nested node at a custom segment, e.g. `items[0]` or
    /// `value`.
    #[must_use]
    pub fn child_at(&self, node: &WidgetNode, segment: &str) -> Output {
        let path = format!("{}.{segment}", self.path);
        render_at(self.registry, self.sink, node, &path)
    }

    /// Forward an action to the host with this node as context.
    pub fn dispatch(&self, action: &Action, node: &WidgetNode) {
        self.sink.dispatch(
            action,
            ActionContext {
                node,
                path: self.path,
            },
        );
    }
}

/// Renders widget trees against a registry.
pub struct Renderer<'a> {
    registry: &'a Registry,
    sink: &'a dyn ActionSink,
}

impl<'a> Renderer<'a> {
    /// A renderer whose actions go nowhere.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            sink: &NULL_SINK,
        }
    }

    /// A renderer dispatching actions into `sink`.
    #[must_use]
    pub fn with_sink(registry: &'a Registry, sink: &'a dyn ActionSink) -> Self {
        Self { registry, sink }
    }

    /// Render a tree rooted at path `root`.
    #[must_use]
    pub fn render(&self, node: &WidgetNode) -> Output {
        let span = debug_span!("widget.render", nodes = node.node_count());
        let _guard = span.enter();
        self.render_at(node, "root")
    }

    /// Render a tree rooted at an explicit path.
    #[must_use]
    pub fn render_at(&self, node: &WidgetNode, path: &str) -> Output {
        render_at(self.registry, self.sink, node, path)
    }
}

fn render_at(registry: &Registry, sink: &dyn ActionSink, node: &WidgetNode, path: &str) -> Output {
    if !node.is_visible() {
        return Output::Empty;
    }

    let tag = node.type_name();
    let Some(implementation) = registry.get(tag) else {
        warn!(widget = tag, path, "no implementation registered");
        return unknown_fallback(tag, path);
    };

    let ctx = RenderContext {
        registry,
        sink,
        path,
    };
    match implementation.render(node, &ctx) {
        Ok(output) => output,
        Err(err) => {
            warn!(widget = tag, path, error = %err, "widget implementation failed");
            error_fallback(tag, path)
        }
    }
}

/// Visible inline stand-in for an unregistered type. Siblings render
/// normally around it.
fn unknown_fallback(tag: &str, path: &str) -> Output {
    Element::new("unknown-widget")
        .attr("data-widget-type", tag)
        .attr("data-path", path)
        .child(Output::text(format!("Unknown widget type: {tag}")))
        .into()
}

/// Inert stand-in for a subtree whose implementation failed.
fn error_fallback(tag: &str, path: &str) -> Output {
    Element::new("widget-error")
        .attr("data-widget-type", tag)
        .attr("data-path", path)
        .child(Output::text("Preview not available"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{RenderError, Registry};
    use std::sync::Mutex;
    use vitrine_schema::{ButtonProps, FrameProps, SpacerProps, TextProps};

    #[test]
    fn invisible_node_renders_empty() {
        let registry = Registry::with_builtins();
        let renderer = Renderer::new(&registry);
        let node: WidgetNode = SpacerProps::new().visible(false).into();
        assert!(renderer.render(&node).is_empty());
    }

    #[test]
    fn unregistered_tag_renders_fallback_not_panic() {
        let mut registry = Registry::with_builtins();
        registry.unregister("Text");
        let renderer = Renderer::new(&registry);
        let node: WidgetNode = TextProps::new("orphan").into();
        let Output::Element(el) = renderer.render(&node) else {
            panic!("expected fallback element");
        };
        assert_eq!(el.tag, "unknown-widget");
        assert_eq!(el.text_content(), "Unknown widget type: Text");
    }

    struct Failing;

    impl crate::registry::WidgetImpl for Failing {
        fn render(
            &self,
            _node: &WidgetNode,
            _ctx: &RenderContext<'_>,
        ) -> Result<Output, RenderError> {
            Err(RenderError::new("Text", "boom"))
        }
    }

    #[test]
    fn failing_implementation_is_isolated_to_its_subtree() {
        let mut registry = Registry::with_builtins();
        registry.register("Text", Failing);
        let renderer = Renderer::new(&registry);
        let node: WidgetNode = FrameProps::new(vec![
            TextProps::new("will fail").into(),
            SpacerProps::new().grow(1.0).into(),
        ])
        .into();
        let Output::Element(frame) = renderer.render(&node) else {
            panic!("expected frame element");
        };
        assert_eq!(frame.children.len(), 2);
        let Output::Element(first) = &frame.children[0] else {
            panic!("expected error placeholder");
        };
        assert_eq!(first.tag, "widget-error");
        let Output::Element(second) = &frame.children[1] else {
            panic!("expected sibling to survive");
        };
        assert_eq!(second.tag, "spacer");
    }

    #[test]
    fn sink_receives_context_from_custom_impl() {
        struct Recording(Mutex<Vec<(String, String)>>);
        impl ActionSink for Recording {
            fn dispatch(&self, action: &Action, ctx: ActionContext<'_>) {
                self.0
                    .lock()
                    .unwrap()
                    .push((action.type_name().to_string(), ctx.path.to_string()));
            }
        }

        // A self-firing button, to prove dispatch plumbing end to end.
        struct SelfFiring;
        impl crate::registry::WidgetImpl for SelfFiring {
            fn render(
                &self,
                node: &WidgetNode,
                ctx: &RenderContext<'_>,
            ) -> Result<Output, RenderError> {
                if let WidgetNode::Button(props) = node
                    && let Some(action) = &props.on_click_action
                {
                    ctx.dispatch(action, node);
                }
                Ok(Output::text("button"))
            }
        }

        let mut registry = Registry::with_builtins();
        registry.register("Button", SelfFiring);

        let sink = Recording(Mutex::new(Vec::new()));
        let renderer = Renderer::with_sink(&registry, &sink);
        let node: WidgetNode = FrameProps::new(vec![
            ButtonProps::new("Go")
                .on_click_action(Action::Navigate { to: "/home".into() })
                .into(),
        ])
        .into();
        let _ = renderer.render(&node);

        let seen = sink.0.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[("navigate".to_string(), "root.children[0]".to_string())]
        );
    }
}
