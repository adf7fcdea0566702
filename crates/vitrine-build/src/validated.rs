#![forbid(unsafe_code)]

//! Opt-in validation around builders.
//!
//! Builders never validate on their own. [`validated`] always checks the
//! built tree; [`maybe_validated`] checks only while the global toggle is
//! on. The toggle defaults to on in debug builds and off in release
//! builds — catch malformed compositions during development, skip the
//! walk in production.

use std::sync::atomic::{AtomicBool, Ordering};

use vitrine_schema::{ValidationError, WidgetNode, validate_widget};

static VALIDATION_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

/// Flip the global validation toggle.
pub fn set_validation_enabled(enabled: bool) {
    VALIDATION_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Current state of the global validation toggle.
#[must_use]
pub fn is_validation_enabled() -> bool {
    VALIDATION_ENABLED.load(Ordering::Relaxed)
}

/// Build a tree and validate it unconditionally.
///
/// Validation goes through the same decoder external JSON does, so a
/// composition that could not have come off the wire (say, a `NaN`
/// amount) is rejected here too.
pub fn validated(builder: impl FnOnce() -> WidgetNode) -> Result<WidgetNode, ValidationError> {
    let node = builder();
    let value =
        serde_json::to_value(&node).expect("widget tree serialization is infallible");
    validate_widget(&value)
}

/// Build a tree and validate it only while the toggle is on.
pub fn maybe_validated(
    builder: impl FnOnce() -> WidgetNode,
) -> Result<WidgetNode, ValidationError> {
    if !is_validation_enabled() {
        return Ok(builder());
    }
    validated(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::text;

    #[test]
    fn validated_returns_equal_tree() {
        let node = validated(|| text("hello").into()).unwrap();
        assert_eq!(node, text("hello").into());
    }

    #[test]
    fn maybe_validated_respects_toggle() {
        // The toggle is process-global; restore it to avoid cross-test
        // interference.
        let before = is_validation_enabled();

        set_validation_enabled(false);
        assert!(!is_validation_enabled());
        let node = maybe_validated(|| text("fast path").into()).unwrap();
        assert_eq!(node, text("fast path").into());

        set_validation_enabled(true);
        assert!(is_validation_enabled());
        let node = maybe_validated(|| text("checked path").into()).unwrap();
        assert_eq!(node, text("checked path").into());

        set_validation_enabled(before);
    }
}
