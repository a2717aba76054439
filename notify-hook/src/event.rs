use serde_json::Map;
use serde_json::Value;

use crate::error::SkipReason;

/// Event tag emitted by Codex when the agent finishes a turn.
pub const AGENT_TURN_COMPLETE: &str = "agent-turn-complete";

/// Read-only view of a hook payload. Accessors treat absent and wrong-typed
/// fields alike and return `None` for both.
#[derive(Debug, Clone, PartialEq)]
pub struct HookEvent {
    fields: Map<String, Value>,
}

impl HookEvent {
    pub fn parse(payload: &str) -> Result<Self, SkipReason> {
        match serde_json::from_str::<Value>(payload)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(SkipReason::NotAnObject),
        }
    }

    pub fn event_type(&self) -> Option<&str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    pub fn is_turn_complete(&self) -> bool {
        self.event_type() == Some(AGENT_TURN_COMPLETE)
    }

    pub fn cwd(&self) -> Option<&str> {
        self.fields.get("cwd").and_then(Value::as_str)
    }

    /// `last_assistant_message.content`, when the message is an object and
    /// its content is a string.
    pub fn last_assistant_content(&self) -> Option<&str> {
        self.fields
            .get("last_assistant_message")
            .and_then(Value::as_object)
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_turn_complete_fields() {
        let event = HookEvent::parse(
            r#"{"type":"agent-turn-complete","cwd":"/x/proj","last_assistant_message":{"content":"Done building."}}"#,
        )
        .expect("payload should parse");

        assert!(event.is_turn_complete());
        assert_eq!(event.cwd(), Some("/x/proj"));
        assert_eq!(event.last_assistant_content(), Some("Done building."));
    }

    #[test]
    fn wrong_typed_fields_read_as_absent() {
        let event = HookEvent::parse(
            r#"{"type":7,"cwd":["/x"],"last_assistant_message":{"content":{"text":"hi"}}}"#,
        )
        .expect("payload should parse");

        assert_eq!(event.event_type(), None);
        assert!(!event.is_turn_complete());
        assert_eq!(event.cwd(), None);
        assert_eq!(event.last_assistant_content(), None);
    }

    #[test]
    fn non_object_message_has_no_content() {
        let event = HookEvent::parse(
            r#"{"type":"agent-turn-complete","last_assistant_message":"plain text"}"#,
        )
        .expect("payload should parse");

        assert_eq!(event.last_assistant_content(), None);
    }

    #[test]
    fn rejects_malformed_and_non_object_payloads() {
        assert!(matches!(
            HookEvent::parse("{not json"),
            Err(SkipReason::InvalidJson(_))
        ));
        assert!(matches!(
            HookEvent::parse(r#"["agent-turn-complete"]"#),
            Err(SkipReason::NotAnObject)
        ));
        assert!(matches!(
            HookEvent::parse("null"),
            Err(SkipReason::NotAnObject)
        ));
    }

    #[test]
    fn non_finite_number_literals_are_not_json() {
        assert!(matches!(
            HookEvent::parse(r#"{"type":"agent-turn-complete","x":NaN}"#),
            Err(SkipReason::InvalidJson(_))
        ));
        assert!(matches!(
            HookEvent::parse(r#"{"type":"agent-turn-complete","x":Infinity}"#),
            Err(SkipReason::InvalidJson(_))
        ));
    }
}
