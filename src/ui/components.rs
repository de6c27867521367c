//! Reusable markup pieces.

use super::escape_html;
use crate::events::{Notice, NoticeKind};

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-health-600 text-white hover:bg-health-700",
            Self::Outline => "border border-health-600 text-health-700 hover:bg-health-50",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-lg font-medium \
                           transition-colors focus-visible:outline-none focus-visible:ring-2 \
                           focus-visible:ring-health-500 disabled:pointer-events-none disabled:opacity-50";

pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("{BUTTON_BASE} {} {}", variant.classes(), size.classes())
}

/// An anchor styled as a button.
pub fn link_button(href: &str, label: &str, variant: ButtonVariant, size: ButtonSize) -> String {
    format!(
        r#"<a href="{href}" class="{classes}">{label}</a>"#,
        classes = button_classes(variant, size),
        href = escape_html(href),
        label = escape_html(label),
    )
}

/// Bordered white card around `body`.
pub fn card(extra_class: &str, body: &str) -> String {
    format!(
        r#"<div class="rounded-xl border border-gray-200 bg-white shadow-sm {extra_class}">{body}</div>"#
    )
}

/// Centered section heading with an optional lead paragraph.
pub fn section_heading(title: &str, lead: &str) -> String {
    let lead = if lead.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="mt-4 text-lg text-gray-600 max-w-3xl mx-auto">{}</p>"#,
            escape_html(lead)
        )
    };
    format!(
        r#"<div class="text-center mb-12"><h2 class="text-3xl font-bold text-gray-900">{}</h2>{lead}</div>"#,
        escape_html(title)
    )
}

/// Toast markup. Appended to `#notices`; `app.js` removes it after a while.
pub fn notice_fragment(notice: &Notice) -> String {
    let (classes, role) = match notice.kind {
        NoticeKind::Success => ("border-green-200 bg-green-50 text-green-900", "status"),
        NoticeKind::Destructive => ("border-red-200 bg-red-50 text-red-900", "alert"),
    };
    let description = if notice.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="text-sm opacity-90">{}</p>"#,
            escape_html(&notice.description)
        )
    };
    format!(
        r#"<div class="notice rounded-lg border p-4 shadow-lg {classes}" role="{role}" data-kind="{kind}"><p class="font-semibold">{title}</p>{description}</div>"#,
        kind = match notice.kind {
            NoticeKind::Success => "success",
            NoticeKind::Destructive => "destructive",
        },
        title = escape_html(&notice.title),
    )
}

/// Inline SVG icons.
pub mod icons {
    const OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

    fn svg(class: &str, paths: &str) -> String {
        format!(r#"{OPEN} class="{class}">{paths}</svg>"#)
    }

    pub fn heart(class: &str) -> String {
        svg(
            class,
            r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#,
        )
    }

    pub fn brain(class: &str) -> String {
        svg(
            class,
            r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/><path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/>"#,
        )
    }

    pub fn pill(class: &str) -> String {
        svg(
            class,
            r#"<path d="m10.5 20.5 10-10a4.95 4.95 0 1 0-7-7l-10 10a4.95 4.95 0 1 0 7 7Z"/><path d="m8.5 8.5 7 7"/>"#,
        )
    }

    pub fn bone(class: &str) -> String {
        svg(
            class,
            r#"<path d="M17 10c.7-.7 1.69 0 2.5 0a2.5 2.5 0 1 0 0-5 .5.5 0 0 1-.5-.5 2.5 2.5 0 1 0-5 0c0 .81.7 1.8 0 2.5l-7 7c-.7.7-1.69 0-2.5 0a2.5 2.5 0 0 0 0 5c.28 0 .5.22.5.5a2.5 2.5 0 1 0 5 0c0-.81-.7-1.8 0-2.5Z"/>"#,
        )
    }

    pub fn thermometer(class: &str) -> String {
        svg(class, r#"<path d="M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0Z"/>"#)
    }

    pub fn activity(class: &str) -> String {
        svg(class, r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#)
    }

    pub fn shield(class: &str) -> String {
        svg(
            class,
            r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#,
        )
    }

    pub fn send(class: &str) -> String {
        svg(
            class,
            r#"<line x1="22" y1="2" x2="11" y2="13"/><polygon points="22 2 15 22 11 13 2 9 22 2"/>"#,
        )
    }

    pub fn loader(class: &str) -> String {
        svg(
            &format!("{class} animate-spin"),
            r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#,
        )
    }

    pub fn menu(class: &str) -> String {
        svg(
            class,
            r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
        )
    }

    pub fn close(class: &str) -> String {
        svg(class, r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#)
    }

    pub fn check(class: &str) -> String {
        svg(class, r#"<path d="M20 6 9 17l-5-5"/>"#)
    }

    pub fn info(class: &str) -> String {
        svg(
            class,
            r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
        )
    }

    pub fn alert(class: &str) -> String {
        svg(
            class,
            r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#,
        )
    }

    pub fn users(class: &str) -> String {
        svg(
            class,
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        )
    }

    pub fn calendar(class: &str) -> String {
        svg(
            class,
            r#"<rect width="18" height="18" x="3" y="4" rx="2"/><path d="M16 2v4"/><path d="M8 2v4"/><path d="M3 10h18"/>"#,
        )
    }

    pub fn mail(class: &str) -> String {
        svg(
            class,
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        )
    }

    pub fn phone(class: &str) -> String {
        svg(
            class,
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.127.96.361 1.903.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
        )
    }

    pub fn map_pin(class: &str) -> String {
        svg(
            class,
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
        )
    }

    pub fn clock(class: &str) -> String {
        svg(
            class,
            r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
        )
    }

    pub fn message(class: &str) -> String {
        svg(
            class,
            r#"<path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/>"#,
        )
    }

    pub fn star(class: &str) -> String {
        svg(
            class,
            r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_fragment_escapes_text() {
        let html = notice_fragment(&Notice::destructive("<script>", "a & b"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains(r#"role="alert""#));
    }

    #[test]
    fn test_notice_without_description() {
        let html = notice_fragment(&Notice::success("Done", ""));
        assert!(html.contains(r#"data-kind="success""#));
        assert!(!html.contains("opacity-90"));
    }

    #[test]
    fn test_button_classes() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Lg);
        assert!(classes.contains("border-health-600"));
        assert!(classes.contains("h-12"));
    }
}
