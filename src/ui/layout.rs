//! Document shell, navigation bar and footer.

use super::components::{ButtonSize, ButtonVariant, icons, link_button};
use super::escape_html;

/// Top-level navigation entries: (path, label).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/consultation", "Consultation"),
    ("/about", "About Us"),
    ("/contact", "Contact"),
];

/// Wrap a page body in the full HTML document.
///
/// With a `session_id` the body opens the session's event stream, so any
/// element inside can `sse-swap` on its events and notices pushed by the
/// server land in `#notices`.
pub fn html_shell(title: &str, active: &str, session_id: Option<&str>, content: &str) -> String {
    let body_attrs = match session_id {
        Some(id) => {
            let id = escape_html(id);
            format!(
                r##" hx-ext="sse" sse-connect="/api/sessions/{id}/events" data-session-id="{id}""##
            )
        }
        None => String::new(),
    };
    let notices = if session_id.is_some() {
        r##"<div id="notices" class="fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2" sse-swap="notice" hx-swap="beforeend"></div>"##
    } else {
        r##"<div id="notices" class="fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2"></div>"##
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Personalized health consultations and insights">
    <title>{title} - HealthConsult</title>

    <script src="https://cdn.tailwindcss.com"></script>
    <script src="/static/tailwind.config.js"></script>
    <script src="https://unpkg.com/htmx.org@2.0.4"></script>
    <script src="https://unpkg.com/htmx-ext-sse@2.2.2/sse.js"></script>
    <script defer src="/static/app.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen flex flex-col bg-white text-gray-900 antialiased"{body_attrs}>
    {nav}
    <main id="app" class="flex-1">
        {content}
    </main>
    {footer}
    {notices}
</body>
</html>"##,
        title = escape_html(title),
        nav = navbar(active, false),
        footer = footer(),
    )
}

/// Navigation bar. `open` controls the mobile menu.
pub fn navbar(active: &str, open: bool) -> String {
    let active_q = escape_html(active);
    let desktop_links: String = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            let state = if *href == active {
                "text-health-700 font-semibold"
            } else {
                "text-gray-600 hover:text-health-600"
            };
            format!(r##"<a href="{href}" class="px-3 py-2 text-sm transition-colors {state}">{label}</a>"##)
        })
        .collect();

    let toggle_icon = if open {
        icons::close("h-6 w-6")
    } else {
        icons::menu("h-6 w-6")
    };

    let mobile_menu = if open {
        let links: String = NAV_LINKS
            .iter()
            .map(|(href, label)| {
                let state = if *href == active {
                    "bg-health-50 text-health-700"
                } else {
                    "text-gray-700 hover:bg-gray-50"
                };
                format!(r##"<a href="{href}" class="block rounded-md px-3 py-2 text-base font-medium {state}">{label}</a>"##)
            })
            .collect();
        format!(
            r##"<div class="md:hidden border-t border-gray-100 px-4 pb-4 pt-2 space-y-1">{links}<div class="pt-2">{login}</div></div>"##,
            login = link_button("/login", "Login", ButtonVariant::Primary, ButtonSize::Md),
        )
    } else {
        String::new()
    };

    format!(
        r##"<nav id="site-nav" class="sticky top-0 z-40 w-full border-b border-gray-100 bg-white/90 backdrop-blur">
    <div class="container mx-auto flex h-16 items-center justify-between px-4 md:px-6">
        <a href="/" class="flex items-center gap-2 font-bold text-xl text-health-700">{logo}<span>HealthConsult</span></a>
        <div class="hidden md:flex items-center gap-1">{desktop_links}</div>
        <div class="hidden md:block">{login}</div>
        <button type="button" class="md:hidden rounded-md p-2 text-gray-700" aria-label="Toggle menu" aria-expanded="{open}"
                hx-get="/fragments/nav?open={next}&amp;active={active_q}" hx-target="#site-nav" hx-swap="outerHTML">{toggle_icon}</button>
    </div>
    {mobile_menu}
</nav>"##,
        logo = icons::activity("h-6 w-6"),
        login = link_button("/login", "Login", ButtonVariant::Primary, ButtonSize::Md),
        next = !open,
    )
}

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    (
        "Services",
        [
            "Online Consultations",
            "Health Assessments",
            "Mental Health Support",
            "Specialist Referrals",
        ],
    ),
    ("Company", ["About Us", "Our Doctors", "Careers", "Contact"]),
    (
        "Legal",
        [
            "Privacy Policy",
            "Terms of Service",
            "Cookie Policy",
            "HIPAA Compliance",
        ],
    ),
];

fn footer() -> String {
    let columns: String = FOOTER_COLUMNS
        .iter()
        .map(|(heading, links)| {
            let items: String = links
                .iter()
                .map(|label| {
                    format!(r##"<li><a href="#" class="text-gray-400 hover:text-white transition-colors">{label}</a></li>"##)
                })
                .collect();
            format!(
                r##"<div><h3 class="text-sm font-semibold uppercase tracking-wider text-gray-300">{heading}</h3><ul class="mt-4 space-y-2 text-sm">{items}</ul></div>"##
            )
        })
        .collect();

    format!(
        r##"<footer class="bg-gray-900 text-white">
    <div class="container mx-auto px-4 md:px-6 py-12">
        <div class="grid gap-8 md:grid-cols-4">
            <div>
                <a href="/" class="flex items-center gap-2 font-bold text-xl">{logo}<span>HealthConsult</span></a>
                <p class="mt-4 text-sm text-gray-400">Personalized health consultations and insights delivered by experienced healthcare professionals.</p>
            </div>
            {columns}
        </div>
        <div class="mt-12 border-t border-gray-800 pt-8 text-center text-sm text-gray-400">
            &copy; 2025 HealthConsult. All rights reserved.
        </div>
    </div>
</footer>"##,
        logo = icons::activity("h-6 w-6 text-health-400"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_menu_toggle() {
        let closed = navbar("/about", false);
        assert!(closed.contains("open=true&amp;active=/about"));
        assert!(!closed.contains("md:hidden border-t"));

        let open = navbar("/about", true);
        assert!(open.contains("open=false&amp;active=/about"));
        assert!(open.contains("md:hidden border-t"));
        assert!(open.contains(r##"aria-expanded="true""##));
    }

    #[test]
    fn test_shell_connects_event_stream_only_with_session() {
        let with = html_shell("Contact", "/contact", Some("abc"), "<p>x</p>");
        assert!(with.contains(r##"sse-connect="/api/sessions/abc/events""##));
        assert!(with.contains("<title>Contact - HealthConsult</title>"));

        let without = html_shell("Home", "/", None, "");
        assert!(!without.contains("sse-connect"));
        assert!(without.contains("HIPAA Compliance"));
    }
}
