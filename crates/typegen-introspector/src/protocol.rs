//! Wire format of the OpenSpace topic protocol.
//!
//! Messages are single-line JSON objects terminated by `\n`:
//!
//! ```text
//! -> {"topic":0,"type":"documentation","payload":{"type":"lua"}}
//! <- {"topic":0,"payload":[{"library":"", "functions":[...]}, ...]}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use typegen_core::{Error, Result};

/// Topic type that authenticates a client with its password.
pub const AUTHORIZE_TOPIC: &str = "authorize";

/// Topic type that returns a documentation document.
pub const DOCUMENTATION_TOPIC: &str = "documentation";

/// Identifier the client allocates for each topic it opens.
pub type TopicId = u64;

/// Outgoing message that opens a topic.
#[derive(Debug, Serialize)]
pub struct TopicRequest<'a> {
    /// Topic id, unique per connection
    pub topic: TopicId,
    /// Kind of topic to open
    #[serde(rename = "type")]
    pub topic_type: &'a str,
    /// Topic-specific payload
    pub payload: &'a Value,
}

impl TopicRequest<'_> {
    /// Serializes the request as one protocol line, including the newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the payload cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use typegen_introspector::protocol::TopicRequest;
    ///
    /// let payload = json!({"type": "lua"});
    /// let line = TopicRequest { topic: 0, topic_type: "documentation", payload: &payload }
    ///     .to_line()
    ///     .unwrap();
    /// assert!(line.ends_with('\n'));
    /// ```
    pub fn to_line(&self) -> Result<String> {
        let mut line = serde_json::to_string(self).map_err(|e| Error::SerializationError {
            message: format!("failed to encode '{}' topic request: {e}", self.topic_type),
            source: Some(e),
        })?;
        line.push('\n');
        Ok(line)
    }
}

/// Incoming message from the server.
///
/// Messages without a topic id are broadcasts the client does not track.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicMessage {
    /// Topic the message belongs to
    #[serde(default)]
    pub topic: Option<TopicId>,
    /// Message body
    #[serde(default)]
    pub payload: Value,
}

impl TopicMessage {
    /// Decodes one received line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProtocolError`] if the line is not a JSON object.
    pub fn from_line(line: &str) -> Result<Self> {
        serde_json::from_str(line.trim_end()).map_err(|e| Error::ProtocolError {
            message: format!("malformed message from server: {e}"),
        })
    }

    /// Returns `true` if the message answers the given topic.
    #[must_use]
    pub fn belongs_to(&self, topic: TopicId) -> bool {
        self.topic == Some(topic)
    }
}

/// Interprets the reply to an `authorize` topic.
///
/// The server answers `{"key": "authorized"}` on success; any other
/// answer means the password was rejected.
#[must_use]
pub fn is_authorized(payload: &Value) -> bool {
    ["key", "status"]
        .iter()
        .filter_map(|field| payload.get(field).and_then(Value::as_str))
        .any(|status| status == "authorized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_line_shape() {
        let payload = json!({"type": "lua"});
        let line = TopicRequest {
            topic: 3,
            topic_type: DOCUMENTATION_TOPIC,
            payload: &payload,
        }
        .to_line()
        .unwrap();

        assert_eq!(line.matches('\n').count(), 1);
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["topic"], 3);
        assert_eq!(value["type"], "documentation");
        assert_eq!(value["payload"]["type"], "lua");
    }

    #[test]
    fn test_message_from_line() {
        let message = TopicMessage::from_line("{\"topic\":1,\"payload\":{\"a\":1}}\r\n").unwrap();
        assert!(message.belongs_to(1));
        assert!(!message.belongs_to(0));
        assert_eq!(message.payload["a"], 1);
    }

    #[test]
    fn test_message_without_topic() {
        let message = TopicMessage::from_line("{\"payload\":null}").unwrap();
        assert_eq!(message.topic, None);
        assert!(!message.belongs_to(0));
    }

    #[test]
    fn test_malformed_message() {
        let err = TopicMessage::from_line("<html>").unwrap_err();
        assert!(err.is_protocol_error());
    }

    #[test]
    fn test_is_authorized() {
        assert!(is_authorized(&json!({"key": "authorized"})));
        assert!(is_authorized(&json!({"status": "authorized"})));
        assert!(!is_authorized(&json!({"key": "unauthorized"})));
        assert!(!is_authorized(&Value::Null));
    }
}
