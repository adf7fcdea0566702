#![forbid(unsafe_code)]

//! The tool-call approval session.
//!
//! A synchronous state machine over the realtime event stream: it
//! configures the session's tool set, turns transcript events into a
//! message log, parks tool calls as pending approvals (with their
//! preview cards), and on a verdict emits the outbound wire messages.
//! Audio transport is somebody else's problem — events arrive here
//! already parsed.

use serde_json::{Value, json};
use tracing::{debug, warn};
use vitrine_schema::WidgetNode;

use crate::catalog::{ToolDef, status_label, tools_config};
use crate::executor::execute_tool_call;
use crate::preview::preview_widget;

/// Inbound events the session branches on. Anything else maps to
/// [`VoiceEvent::Other`] and is ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceEvent {
    SessionCreated,
    SpeechStarted,
    SpeechStopped,
    TranscriptDelta { delta: String },
    TranscriptDone { transcript: String },
    InputTranscriptCompleted { transcript: String },
    FunctionCallArgumentsDone {
        name: String,
        call_id: String,
        /// The arguments as the JSON string the wire delivers.
        arguments: String,
    },
    Other { event_type: String },
}

impl VoiceEvent {
    /// Map a raw wire event to a session event.
    #[must_use]
    pub fn from_value(event: &Value) -> Self {
        let event_type = event.get("type").and_then(Value::as_str).unwrap_or("");
        let str_field = |field: &str| {
            event
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string()
        };
        match event_type {
            "session.created" => Self::SessionCreated,
            "input_audio_buffer.speech_started" => Self::SpeechStarted,
            "input_audio_buffer.speech_stopped" | "input_audio_buffer.committed" => {
                Self::SpeechStopped
            }
            "response.audio_transcript.delta" => Self::TranscriptDelta {
                delta: str_field("delta"),
            },
            "response.audio_transcript.done" => Self::TranscriptDone {
                transcript: str_field("transcript"),
            },
            "conversation.item.input_audio_transcription.completed" => {
                Self::InputTranscriptCompleted {
                    transcript: str_field("transcript"),
                }
            }
            "response.function_call_arguments.done" => Self::FunctionCallArgumentsDone {
                name: str_field("name"),
                call_id: str_field("call_id"),
                arguments: str_field("arguments"),
            },
            other => Self::Other {
                event_type: other.to_string(),
            },
        }
    }
}

/// Outbound messages the session produces for the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    /// Configure the session's tool set.
    SessionUpdate { tools: Vec<ToolDef> },
    /// Deliver a tool call's output (result, error, or rejection).
    FunctionCallOutput { call_id: String, output: String },
    /// Ask the model to continue after a tool output.
    ResponseCreate,
}

impl Outbound {
    /// The wire object for this message.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        match self {
            Self::SessionUpdate { tools } => json!({
                "type": "session.update",
                "session": {
                    "tools": tools.iter().map(ToolDef::to_wire).collect::<Vec<_>>(),
                    "tool_choice": "auto",
                }
            }),
            Self::FunctionCallOutput { call_id, output } => json!({
                "type": "conversation.item.create",
                "item": {
                    "type": "function_call_output",
                    "call_id": call_id,
                    "output": output,
                }
            }),
            Self::ResponseCreate => json!({"type": "response.create"}),
        }
    }
}

/// A tool call waiting for a user verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCall {
    pub call_id: String,
    pub name: String,
    pub args: Value,
    /// The approval card to show while the call is parked.
    pub preview: WidgetNode,
}

/// One completed execution, for the session's audit log.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolExecution {
    pub call_id: String,
    pub name: String,
    pub args: Value,
    pub result: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One finished utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// A verdict referenced a call that is not pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub call_id: String,
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "no pending tool call `{}`", self.call_id)
    }
}

impl std::error::Error for SessionError {}

/// The session state machine.
#[derive(Debug, Default)]
pub struct ToolSession {
    pending: Vec<PendingCall>,
    executions: Vec<ToolExecution>,
    messages: Vec<Message>,
    transcript: String,
    status: String,
}

impl ToolSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls parked for approval, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[PendingCall] {
        &self.pending
    }

    /// Completed executions, oldest first.
    #[must_use]
    pub fn executions(&self) -> &[ToolExecution] {
        &self.executions
    }

    /// Finished utterances, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The assistant status line ("Listening...", "Sending invoice...").
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The assistant's in-flight transcript.
    #[must_use]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Feed one inbound event; returns the messages to put on the wire.
    pub fn handle_event(&mut self, event: VoiceEvent) -> Vec<Outbound> {
        match event {
            VoiceEvent::SessionCreated => {
                self.status = "Ready".to_string();
                debug!("session created; configuring tools");
                vec![Outbound::SessionUpdate {
                    tools: tools_config(),
                }]
            }
            VoiceEvent::SpeechStarted => {
                self.status = "Listening...".to_string();
                self.transcript.clear();
                Vec::new()
            }
            VoiceEvent::SpeechStopped => {
                self.status = "Processing...".to_string();
                Vec::new()
            }
            VoiceEvent::TranscriptDelta { delta } => {
                self.status = "Speaking...".to_string();
                self.transcript.push_str(&delta);
                Vec::new()
            }
            VoiceEvent::TranscriptDone { transcript } => {
                self.status.clear();
                self.transcript.clear();
                if !transcript.is_empty() {
                    self.messages.push(Message {
                        role: Role::Assistant,
                        content: transcript,
                    });
                }
                Vec::new()
            }
            VoiceEvent::InputTranscriptCompleted { transcript } => {
                self.status.clear();
                if !transcript.is_empty() {
                    self.messages.push(Message {
                        role: Role::User,
                        content: transcript,
                    });
                }
                Vec::new()
            }
            VoiceEvent::FunctionCallArgumentsDone {
                name,
                call_id,
                arguments,
            } => {
                self.status = status_label(&name).to_string();
                match serde_json::from_str::<Value>(&arguments) {
                    Ok(args) => {
                        debug!(tool = %name, call_id = %call_id, "tool call parked for approval");
                        let preview = preview_widget(&name, &args);
                        self.pending.push(PendingCall {
                            call_id,
                            name,
                            args,
                            preview,
                        });
                        Vec::new()
                    }
                    Err(err) => {
                        warn!(tool = %name, call_id = %call_id, error = %err,
                              "tool call arguments are not JSON");
                        self.status.clear();
                        vec![
                            Outbound::FunctionCallOutput {
                                call_id,
                                output: error_output(&format!(
                                    "invalid tool arguments: {err}"
                                )),
                            },
                            Outbound::ResponseCreate,
                        ]
                    }
                }
            }
            VoiceEvent::Other { event_type } => {
                debug!(event = %event_type, "ignoring event");
                Vec::new()
            }
        }
    }

    /// Approve a pending call: execute it, log the execution, and emit
    /// its output.
    pub fn approve(&mut self, call_id: &str) -> Result<Vec<Outbound>, SessionError> {
        let call = self.take_pending(call_id)?;
        self.status.clear();
        let output = match execute_tool_call(&call.name, &call.args) {
            Ok(result) => {
                let result_value = result.to_value();
                debug!(tool = %call.name, call_id = %call.call_id, "tool executed");
                self.executions.push(ToolExecution {
                    call_id: call.call_id.clone(),
                    name: call.name.clone(),
                    args: call.args.clone(),
                    result: result_value.clone(),
                });
                serde_json::to_string(&result_value)
                    .expect("tool result serialization is infallible")
            }
            Err(err) => {
                warn!(tool = %call.name, call_id = %call.call_id, error = %err,
                      "tool execution failed");
                error_output(&err.to_string())
            }
        };
        Ok(vec![
            Outbound::FunctionCallOutput {
                call_id: call.call_id,
                output,
            },
            Outbound::ResponseCreate,
        ])
    }

    /// Reject a pending call: emit the cancellation output.
    pub fn reject(&mut self, call_id: &str) -> Result<Vec<Outbound>, SessionError> {
        let call = self.take_pending(call_id)?;
        self.status.clear();
        debug!(tool = %call.name, call_id = %call.call_id, "tool call rejected");
        let output = json!({
            "error": "User denied tool execution",
            "status": "cancelled",
        });
        Ok(vec![
            Outbound::FunctionCallOutput {
                call_id: call.call_id,
                output: output.to_string(),
            },
            Outbound::ResponseCreate,
        ])
    }

    fn take_pending(&mut self, call_id: &str) -> Result<PendingCall, SessionError> {
        let index = self
            .pending
            .iter()
            .position(|call| call.call_id == call_id)
            .ok_or_else(|| SessionError {
                call_id: call_id.to_string(),
            })?;
        Ok(self.pending.remove(index))
    }
}

fn error_output(detail: &str) -> String {
    json!({"error": detail, "status": "failed"}).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_event(name: &str, call_id: &str, arguments: &str) -> VoiceEvent {
        VoiceEvent::FunctionCallArgumentsDone {
            name: name.to_string(),
            call_id: call_id.to_string(),
            arguments: arguments.to_string(),
        }
    }

    #[test]
    fn session_created_configures_tools() {
        let mut session = ToolSession::new();
        let out = session.handle_event(VoiceEvent::SessionCreated);
        assert_eq!(out.len(), 1);
        let wire = out[0].to_wire();
        assert_eq!(wire["type"], "session.update");
        assert_eq!(wire["session"]["tools"].as_array().unwrap().len(), 7);
        assert_eq!(wire["session"]["tool_choice"], "auto");
        assert_eq!(session.status(), "Ready");
    }

    #[test]
    fn tool_call_parks_with_preview_until_verdict() {
        let mut session = ToolSession::new();
        let out = session.handle_event(call_event(
            "create_virtual_card",
            "call_1",
            r#"{"label": "Ops", "currency": "NGN"}"#,
        ));
        assert!(out.is_empty(), "nothing goes out before a verdict");
        assert_eq!(session.pending().len(), 1);
        assert_eq!(session.pending()[0].name, "create_virtual_card");
        assert_eq!(session.status(), "Creating virtual card...");
        // The preview is a ready-to-render card.
        let preview_json = serde_json::to_string(&session.pending()[0].preview).unwrap();
        assert!(preview_json.contains("Virtual Card Preview"));
    }

    #[test]
    fn approve_executes_and_emits_output() {
        let mut session = ToolSession::new();
        session.handle_event(call_event(
            "create_virtual_card",
            "call_1",
            r#"{"label": "Ops", "currency": "NGN"}"#,
        ));
        let out = session.approve("call_1").unwrap();
        assert_eq!(out.len(), 2);
        let Outbound::FunctionCallOutput { call_id, output } = &out[0] else {
            panic!("expected function call output first");
        };
        assert_eq!(call_id, "call_1");
        let parsed: Value = serde_json::from_str(output).unwrap();
        assert_eq!(parsed["status"], "created");
        assert_eq!(parsed["_widget"]["type"], "Frame");
        assert_eq!(out[1], Outbound::ResponseCreate);

        assert!(session.pending().is_empty());
        assert_eq!(session.executions().len(), 1);
        assert_eq!(session.executions()[0].name, "create_virtual_card");

        let wire = out[0].to_wire();
        assert_eq!(wire["type"], "conversation.item.create");
        assert_eq!(wire["item"]["type"], "function_call_output");
        assert_eq!(wire["item"]["call_id"], "call_1");
    }

    #[test]
    fn reject_emits_cancellation() {
        let mut session = ToolSession::new();
        session.handle_event(call_event(
            "account_snapshot",
            "call_2",
            r#"{"window": "this_month"}"#,
        ));
        let out = session.reject("call_2").unwrap();
        let Outbound::FunctionCallOutput { output, .. } = &out[0] else {
            panic!("expected function call output first");
        };
        let parsed: Value = serde_json::from_str(output).unwrap();
        assert_eq!(parsed["error"], "User denied tool execution");
        assert_eq!(parsed["status"], "cancelled");
        assert_eq!(out[1], Outbound::ResponseCreate);
        assert!(session.executions().is_empty());
    }

    #[test]
    fn malformed_arguments_error_immediately() {
        let mut session = ToolSession::new();
        let out = session.handle_event(call_event("account_snapshot", "call_3", "{not json"));
        assert_eq!(out.len(), 2);
        let Outbound::FunctionCallOutput { output, .. } = &out[0] else {
            panic!("expected function call output first");
        };
        let parsed: Value = serde_json::from_str(output).unwrap();
        assert_eq!(parsed["status"], "failed");
        assert!(
            parsed["error"]
                .as_str()
                .unwrap()
                .starts_with("invalid tool arguments")
        );
        assert!(session.pending().is_empty());
    }

    #[test]
    fn unknown_verdict_is_an_error() {
        let mut session = ToolSession::new();
        let err = session.approve("call_404").unwrap_err();
        assert_eq!(err.call_id, "call_404");
        let err = session.reject("call_404").unwrap_err();
        assert_eq!(err.call_id, "call_404");
    }

    #[test]
    fn transcripts_become_messages() {
        let mut session = ToolSession::new();
        session.handle_event(VoiceEvent::SpeechStarted);
        assert_eq!(session.status(), "Listening...");
        session.handle_event(VoiceEvent::InputTranscriptCompleted {
            transcript: "pay my contractors".into(),
        });
        session.handle_event(VoiceEvent::TranscriptDelta { delta: "On ".into() });
        session.handle_event(VoiceEvent::TranscriptDelta { delta: "it.".into() });
        assert_eq!(session.transcript(), "On it.");
        session.handle_event(VoiceEvent::TranscriptDone {
            transcript: "On it.".into(),
        });
        assert_eq!(session.transcript(), "");
        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, "On it.");
    }

    #[test]
    fn event_parsing_from_wire() {
        let event = VoiceEvent::from_value(&json!({
            "type": "response.function_call_arguments.done",
            "name": "send_invoice",
            "call_id": "call_9",
            "arguments": "{}"
        }));
        assert_eq!(
            event,
            VoiceEvent::FunctionCallArgumentsDone {
                name: "send_invoice".into(),
                call_id: "call_9".into(),
                arguments: "{}".into(),
            }
        );
        let event = VoiceEvent::from_value(&json!({"type": "output_audio_buffer.started"}));
        assert_eq!(
            event,
            VoiceEvent::Other {
                event_type: "output_audio_buffer.started".into()
            }
        );
    }
}
