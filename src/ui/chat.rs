//! Chat widget markup.

use super::components::icons;
use super::escape_html;
use crate::assistant::{LANGUAGES, Language, Message, Sender};
use crate::session::ChatState;

pub const LOADING_TEXT: &str = "Analyzing your information...";

/// One message bubble. User messages sit on the right.
pub fn message_bubble(message: &Message) -> String {
    let (row, bubble, who) = match message.sender {
        Sender::User => (
            "justify-end",
            "bg-health-600 text-white rounded-br-none",
            "You",
        ),
        Sender::Assistant => (
            "justify-start",
            "bg-gray-100 text-gray-900 rounded-bl-none",
            "Assistant",
        ),
    };
    format!(
        r##"<div class="flex {row}" id="msg-{id}" data-sender="{sender}"><div class="max-w-[80%] rounded-lg px-4 py-2 {bubble}"><p class="text-sm whitespace-pre-wrap">{content}</p><p class="mt-1 text-xs opacity-70"><span class="sr-only">{who} at </span><time datetime="{iso}">{time}</time></p></div></div>"##,
        id = escape_html(&message.id),
        sender = if message.is_user() { "user" } else { "assistant" },
        content = escape_html(&message.content),
        iso = message.timestamp.to_rfc3339(),
        time = message.timestamp.format("%H:%M"),
    )
}

/// "Analyzing your information..." row shown while replies are pending.
pub fn loading_indicator() -> String {
    format!(
        r##"<div class="flex justify-start"><div class="flex items-center gap-2 rounded-lg bg-gray-100 px-4 py-2 text-sm text-gray-600">{spinner}<span>{LOADING_TEXT}</span></div></div>"##,
        spinner = icons::loader("h-4 w-4"),
    )
}

pub fn language_picker(session_id: &str, current: Language) -> String {
    let options: String = LANGUAGES
        .iter()
        .map(|lang| {
            let selected = if *lang == current { " selected" } else { "" };
            format!(
                r##"<option value="{code}"{selected}>{name}</option>"##,
                code = lang.code,
                name = lang.name
            )
        })
        .collect();
    format!(
        r##"<select id="chat-language" name="code" aria-label="Response language" class="rounded-md border border-gray-200 bg-white px-2 py-1 text-sm"
        hx-post="/api/sessions/{id}/language" hx-trigger="change" hx-swap="outerHTML">{options}</select>"##,
        id = escape_html(session_id),
    )
}

/// Full chat card for the dashboard's assistant tab.
pub fn chat_widget(session_id: &str, chat: &ChatState) -> String {
    let id = escape_html(session_id);
    let messages: String = chat.messages().iter().map(message_bubble).collect();
    let loading = if chat.is_pending() {
        loading_indicator()
    } else {
        String::new()
    };

    format!(
        r##"<div class="flex h-[600px] flex-col rounded-xl border border-gray-200 bg-white shadow-sm">
    <div class="flex items-center justify-between border-b border-gray-100 px-4 py-3">
        <div class="flex items-center gap-2">
            {icon}
            <div>
                <h3 class="font-semibold">Healthcare Assistant</h3>
                <p class="flex items-center gap-1 text-xs text-gray-500">{shield}Private &amp; Secure</p>
            </div>
        </div>
        {picker}
    </div>
    <div id="chat-scroll" class="flex-1 overflow-y-auto p-4">
        <div id="chat-messages" class="space-y-4" sse-swap="chat-message" hx-swap="beforeend">{messages}</div>
        <div id="chat-loading" class="mt-4" sse-swap="chat-pending,chat-idle" hx-swap="innerHTML">{loading}</div>
    </div>
    <form class="flex gap-2 border-t border-gray-100 p-4"
          hx-post="/api/sessions/{id}/chat" hx-target="#chat-messages" hx-swap="beforeend"
          hx-on::after-request="if (event.detail.successful) this.reset()">
        <textarea name="message" rows="1" data-submit-on-enter placeholder="Describe your symptoms or health concerns..."
                  class="flex-1 resize-none rounded-lg border border-gray-200 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-health-500"></textarea>
        <button type="submit" class="inline-flex h-10 w-10 items-center justify-center rounded-lg bg-health-600 text-white hover:bg-health-700" aria-label="Send">{send}</button>
    </form>
    <p class="px-4 pb-3 text-xs text-gray-500">This AI assistant provides general health information only and is not a substitute for professional medical advice. Your conversations are private and secure.</p>
</div>"##,
        icon = icons::message("h-5 w-5 text-health-600"),
        shield = icons::shield("h-3 w-3"),
        picker = language_picker(session_id, chat.language()),
        send = icons::send("h-4 w-4"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_escapes_content() {
        let html = message_bubble(&Message::user("<img src=x>"));
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(html.contains(r##"data-sender="user""##));
        assert!(html.contains("justify-end"));
    }

    #[test]
    fn test_picker_marks_current_language() {
        let html = language_picker("s1", Language::from_code("fr").unwrap());
        assert!(html.contains(r##"<option value="fr" selected>French</option>"##));
        assert!(html.contains(r##"<option value="en">English</option>"##));
    }

    #[test]
    fn test_widget_starts_with_greeting() {
        let html = chat_widget("s1", &ChatState::default());
        assert!(html.contains("How can I assist you today?"));
        assert!(!html.contains(LOADING_TEXT));
    }

    #[test]
    fn test_enter_sends_message() {
        let html = chat_widget("s1", &ChatState::default());
        assert!(html.contains(r##"<textarea name="message" rows="1" data-submit-on-enter"##));
        let script = include_str!("../../static/app.js");
        assert!(script.contains("[data-submit-on-enter]"));
        assert!(script.contains("requestSubmit()"));
    }
}
