#![forbid(unsafe_code)]

//! The host collaborators that feed the widget engine: a tool catalog,
//! preview cards shown before approval, a mock execution backend whose
//! results carry pre-built widgets, and the synchronous approval session
//! that ties them to a realtime event stream.
//!
//! Nothing here does I/O. The session consumes already-parsed events and
//! emits outbound messages as values; putting them on a wire is the
//! host's job.

pub mod catalog;
pub mod executor;
pub mod preview;
pub mod session;

pub use catalog::{ToolDef, status_label, tools_config};
pub use executor::{ToolError, ToolResult, execute_tool_call};
pub use preview::preview_widget;
pub use session::{
    Message, Outbound, PendingCall, Role, SessionError, ToolExecution, ToolSession, VoiceEvent,
};
