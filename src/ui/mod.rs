//! Server-rendered HTML.
//!
//! Pages and HTMX fragments are plain strings assembled with `format!`.
//! Everything user-supplied goes through [`escape_html`] before it lands in
//! markup.
//!
//! # Structure
//!
//! - [`layout`]: document shell, navigation bar, footer
//! - [`components`]: buttons, cards, notices, icons
//! - [`pages`]: full page bodies
//! - [`chat`], [`symptoms`], [`contact`]: interactive widgets and their fragments
//! - [`sse`]: fragments pushed over the event stream

pub mod chat;
pub mod components;
pub mod contact;
pub mod layout;
pub mod pages;
pub mod sse;
pub mod symptoms;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b onclick="x">Tom & 'Jerry'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
