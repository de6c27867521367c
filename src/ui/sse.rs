//! HTML fragments for the event stream.

use super::{chat, components, contact};
use crate::contact::ContactState;
use crate::events::{SiteEvent, event_name};

/// Fragment HTMX swaps in for `evt`.
pub fn render_event(session_id: &str, evt: &SiteEvent) -> String {
    match evt {
        SiteEvent::ChatPending => chat::loading_indicator(),
        SiteEvent::ChatMessage { message } => chat::message_bubble(message),
        SiteEvent::ChatIdle => String::new(),
        SiteEvent::ContactSent => contact::contact_form(session_id, &ContactState::default()),
        SiteEvent::Notice { notice } => components::notice_fragment(notice),
    }
}

/// Format `evt` as an SSE frame whose data is the rendered fragment.
///
/// Multi-line fragments become one `data:` line each; the browser joins
/// them back with newlines.
pub fn html_sse_event(session_id: &str, evt: &SiteEvent) -> String {
    let html = render_event(session_id, evt);
    let mut frame = format!("event: {}\n", event_name(evt));
    if html.is_empty() {
        frame.push_str("data: \n");
    } else {
        for line in html.lines() {
            frame.push_str("data: ");
            frame.push_str(line);
            frame.push('\n');
        }
    }
    frame.push('\n');
    frame
}
