//! Contact form markup.

use super::components::{ButtonSize, ButtonVariant, button_classes};
use super::escape_html;
use crate::contact::{ContactState, SUBJECTS};

const FIELD: &str = "w-full rounded-lg border border-gray-200 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-health-500 disabled:bg-gray-50";

/// The contact form, swapped whole on submit and again when delivery
/// finishes (`contact-sent`).
pub fn contact_form(session_id: &str, state: &ContactState) -> String {
    let id = escape_html(session_id);
    let form = state.form();
    let disabled = if state.is_submitting() { " disabled" } else { "" };
    let submit_label = if state.is_submitting() {
        "Sending..."
    } else {
        "Send Message"
    };

    let subject_options: String = SUBJECTS
        .iter()
        .map(|subject| {
            let selected = if form.subject == *subject {
                " selected"
            } else {
                ""
            };
            format!(r#"<option value="{subject}"{selected}>{subject}</option>"#)
        })
        .collect();
    let placeholder_selected = if form.subject.is_empty() {
        " selected"
    } else {
        ""
    };

    format!(
        r##"<form id="contact-form" class="space-y-4" aria-busy="{busy}"
      hx-post="/api/sessions/{id}/contact" hx-swap="outerHTML"
      sse-swap="contact-sent">
    <div class="grid gap-4 md:grid-cols-2">
        <div>
            <label for="contact-name" class="mb-1 block text-sm font-medium text-gray-700">Your Name</label>
            <input id="contact-name" name="name" type="text" value="{name}" placeholder="John Doe" class="{FIELD}"{disabled}>
        </div>
        <div>
            <label for="contact-email" class="mb-1 block text-sm font-medium text-gray-700">Email Address</label>
            <input id="contact-email" name="email" type="email" value="{email}" placeholder="john@example.com" class="{FIELD}"{disabled}>
        </div>
    </div>
    <div class="grid gap-4 md:grid-cols-2">
        <div>
            <label for="contact-phone" class="mb-1 block text-sm font-medium text-gray-700">Phone Number (Optional)</label>
            <input id="contact-phone" name="phone" type="tel" value="{phone}" placeholder="+1 (555) 123-4567" class="{FIELD}"{disabled}>
        </div>
        <div>
            <label for="contact-subject" class="mb-1 block text-sm font-medium text-gray-700">Subject</label>
            <select id="contact-subject" name="subject" class="{FIELD}"{disabled}>
                <option value="" disabled{placeholder_selected}>Select a subject</option>
                {subject_options}
            </select>
        </div>
    </div>
    <div>
        <label for="contact-message" class="mb-1 block text-sm font-medium text-gray-700">Your Message</label>
        <textarea id="contact-message" name="message" rows="5" placeholder="How can we help you?" class="{FIELD}"{disabled}>{message}</textarea>
    </div>
    <button type="submit" class="{button} w-full"{disabled}>{submit_label}</button>
</form>"##,
        busy = state.is_submitting(),
        name = escape_html(&form.name),
        email = escape_html(&form.email),
        phone = escape_html(&form.phone),
        message = escape_html(&form.message),
        button = button_classes(ButtonVariant::Primary, ButtonSize::Lg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;

    #[test]
    fn test_empty_form() {
        let html = contact_form("s1", &ContactState::default());
        assert!(html.contains("Send Message"));
        assert!(!html.contains(" disabled>"));
        assert!(html.contains(r#"<option value="" disabled selected>Select a subject</option>"#));
    }

    #[test]
    fn test_submitting_form_is_disabled_and_keeps_values() {
        let mut state = ContactState::default();
        state
            .submit(ContactForm {
                name: "Ann <3".into(),
                email: "a@b.com".into(),
                phone: String::new(),
                subject: "Feedback".into(),
                message: "Hi".into(),
            })
            .unwrap();

        let html = contact_form("s1", &state);
        assert!(html.contains("Sending..."));
        assert!(html.contains(r#"value="Ann &lt;3""#));
        assert!(html.contains(r#"<option value="Feedback" selected>Feedback</option>"#));
        assert!(html.contains(r#"aria-busy="true""#));
    }
}
