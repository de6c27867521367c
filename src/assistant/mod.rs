//! Canned healthcare assistant.
//!
//! Replies come from an ordered keyword table and are delivered after a
//! simulated delay through the session's deferred queue. The "translation"
//! only tags the reply with the selected language's name.

pub mod language;
pub mod matcher;
pub mod message;
pub mod translate;

use std::sync::Arc;
use std::time::Duration;

pub use language::{LANGUAGES, Language};
pub use matcher::{KeywordResponder, Responder};
pub use message::{Message, Sender};
pub use translate::{LabelTranslator, Translator};

use crate::error::ValidationError;
use crate::events::SiteEvent;
use crate::session::Session;

/// Default reply delay.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct ChatAssistant {
    responder: Arc<dyn Responder>,
    translator: Arc<dyn Translator>,
    delay: Duration,
}

impl Default for ChatAssistant {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ChatAssistant {
    /// Keyword responder plus label translator, replying after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self::with_parts(Arc::new(KeywordResponder), Arc::new(LabelTranslator), delay)
    }

    pub fn with_parts(
        responder: Arc<dyn Responder>,
        translator: Arc<dyn Translator>,
        delay: Duration,
    ) -> Self {
        Self {
            responder,
            translator,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Reply text for `input` in `language`.
    pub fn reply_for(&self, input: &str, language: Language) -> String {
        self.translator
            .translate(self.responder.respond(input), language)
    }

    /// Append the user's message and schedule the assistant's reply.
    ///
    /// Blank input is rejected without touching the session. The reply uses
    /// the language selected at the time of this call.
    pub fn submit(&self, session: &Session, input: &str) -> Result<Message, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        let message = session.push_message(Message::user(input));
        session.begin_reply();
        session.emit(SiteEvent::ChatPending);

        let reply = self.reply_for(input, session.language());
        let target = session.clone();
        let scheduled = session.defer(self.delay, move || {
            let message = target.push_message(Message::assistant(reply));
            tracing::debug!(
                name: "chat.reply.delivered",
                session_id = %target.id(),
                message_id = %message.id,
                "Assistant reply delivered"
            );
            let idle = target.finish_reply();
            target.emit(SiteEvent::ChatMessage { message });
            if idle {
                target.emit(SiteEvent::ChatIdle);
            }
        });

        if !scheduled {
            // The page is already gone; nothing will ever deliver the reply.
            session.finish_reply();
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let store = SessionStore::new();
        let session = store.create();
        let assistant = ChatAssistant::default();

        assistant.submit(&session, "I have a Headache").unwrap();
        assert_eq!(session.message_count(), 2);
        assert!(session.is_reply_pending());

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert_eq!(session.message_count(), 2);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].sender, Sender::Assistant);
        assert_eq!(messages[2].content, matcher::HEADACHE_ADVICE);
        assert!(!session.is_reply_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_uses_language_at_submit() {
        let store = SessionStore::new();
        let session = store.create();
        let assistant = ChatAssistant::default();

        session.set_language(Language::from_code("es").unwrap());
        assistant.submit(&session, "I have a headache").unwrap();
        session.set_language(Language::default());

        tokio::time::sleep(Duration::from_secs(2)).await;
        let reply = session.messages().pop().unwrap();
        assert_eq!(
            reply.content,
            format!("{} [Translated to Spanish]", matcher::HEADACHE_ADVICE)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_is_rejected() {
        let store = SessionStore::new();
        let session = store.create();
        let mut events = session.subscribe();
        let assistant = ChatAssistant::default();

        assert_eq!(
            assistant.submit(&session, "  \t\n").unwrap_err(),
            ValidationError::EmptyMessage
        );
        assert_eq!(session.message_count(), 1);
        assert!(!session.is_reply_pending());
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_replies_keep_submission_order() {
        let store = SessionStore::new();
        let session = store.create();
        let mut events = session.subscribe();
        let assistant = ChatAssistant::default();

        assistant.submit(&session, "fever").unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assistant.submit(&session, "trouble with sleep").unwrap();

        tokio::time::sleep(Duration::from_secs(2)).await;
        let contents: Vec<_> = session
            .messages()
            .into_iter()
            .skip(1)
            .map(|m| m.content)
            .collect();
        assert_eq!(
            contents,
            [
                "fever",
                "trouble with sleep",
                matcher::FEVER_ADVICE,
                matcher::SLEEP_ADVICE
            ]
        );

        let mut names = Vec::new();
        while let Ok(event) = events.try_recv() {
            names.push(crate::events::event_name(&event));
        }
        assert_eq!(
            names,
            [
                "chat-pending",
                "chat-pending",
                "chat-message",
                "chat-message",
                "chat-idle"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_session_drops_reply() {
        let store = SessionStore::new();
        let session = store.create();
        let assistant = ChatAssistant::default();

        assistant.submit(&session, "stress").unwrap();
        store.remove(session.id());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.message_count(), 2);
    }
}
