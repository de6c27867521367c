//! Events published by a page-view session.
//!
//! Deferred work (chat replies, contact delivery) finishes after the request
//! that started it has returned. Its results are published as [`SiteEvent`]s
//! on the session's broadcast channel and delivered to the browser over SSE.
//!
//! # Example
//!
//! ```rust
//! use healthconsult::events::{SiteEvent, sse_event};
//!
//! let sse = sse_event(&SiteEvent::ChatIdle);
//! assert!(sse.starts_with("event: chat-idle\n"));
//! ```

use serde::{Deserialize, Serialize};

use crate::assistant::Message;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// A toast-style notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum SiteEvent {
    /// A chat reply is being prepared; show the loading indicator.
    #[serde(rename = "chat.pending")]
    ChatPending,

    /// A message was appended to the chat.
    #[serde(rename = "chat.message")]
    ChatMessage { message: Message },

    /// No chat reply is outstanding any more.
    #[serde(rename = "chat.idle")]
    ChatIdle,

    /// The simulated contact delivery finished and the form was cleared.
    #[serde(rename = "contact.sent")]
    ContactSent,

    #[serde(rename = "notice")]
    Notice { notice: Notice },
}

/// SSE event name, also used as the HTMX `sse-swap` key.
pub fn event_name(evt: &SiteEvent) -> &'static str {
    match evt {
        SiteEvent::ChatPending => "chat-pending",
        SiteEvent::ChatMessage { .. } => "chat-message",
        SiteEvent::ChatIdle => "chat-idle",
        SiteEvent::ContactSent => "contact-sent",
        SiteEvent::Notice { .. } => "notice",
    }
}

/// Format a [`SiteEvent`] as an SSE frame carrying its JSON payload.
pub fn sse_event(evt: &SiteEvent) -> String {
    let json = serde_json::to_string(evt).unwrap_or_else(|e| {
        serde_json::json!({ "type": "error", "data": { "message": e.to_string() } }).to_string()
    });

    let event_name = event_name(evt);

    format!("event: {event_name}\ndata: {json}\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_serialization() {
        let event = SiteEvent::ChatMessage {
            message: Message::assistant("Stay hydrated."),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"chat.message""#));
        assert!(json.contains("Stay hydrated."));
        assert!(json.contains(r#""sender":"assistant""#));
    }

    #[test]
    fn test_sse_event_format() {
        let sse = sse_event(&SiteEvent::ContactSent);
        assert!(sse.starts_with("event: contact-sent\n"));
        assert!(sse.contains("data: "));
        assert!(sse.ends_with("\n\n"));
    }

    #[test]
    fn test_notice_skips_empty_description() {
        let json = serde_json::to_string(&Notice::destructive("Oops", "")).unwrap();
        assert_eq!(json, r#"{"kind":"destructive","title":"Oops"}"#);
    }
}
