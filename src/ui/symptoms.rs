//! Symptom selector markup.

use super::components::{ButtonSize, ButtonVariant, button_classes, icons};
use super::escape_html;
use crate::symptoms::{CATALOG, SymptomCategory, SymptomSelection};

fn category_icon(id: &str, class: &str) -> String {
    match id {
        "heart" => icons::heart(class),
        "brain" => icons::brain(class),
        "digestive" => icons::pill(class),
        "bone" => icons::bone(class),
        _ => icons::thermometer(class),
    }
}

/// Toggle grid. Swapped whole after every toggle.
pub fn symptom_grid(session_id: &str, selection: &SymptomSelection) -> String {
    let id = escape_html(session_id);
    let tiles: String = CATALOG
        .iter()
        .map(|category| {
            let selected = selection.is_selected(category.id);
            let state = if selected {
                "border-health-600 bg-health-50 text-health-700"
            } else {
                "border-gray-200 bg-white text-gray-700 hover:border-health-300"
            };
            let check = if selected {
                icons::check("absolute right-2 top-2 h-4 w-4 text-health-600")
            } else {
                String::new()
            };
            format!(
                r##"<div hx-get="/api/sessions/{id}/symptoms/{cid}/info" hx-trigger="mouseenter, focusin" hx-target="#symptom-info" hx-swap="outerHTML">
    <button type="button" class="relative flex w-full flex-col items-center gap-2 rounded-lg border-2 p-4 transition-colors {state}" aria-pressed="{selected}"
            hx-post="/api/sessions/{id}/symptoms/{cid}/toggle" hx-target="#symptom-grid" hx-swap="outerHTML">{check}{icon}<span class="text-sm font-medium">{label}</span></button>
</div>"##,
                cid = category.id,
                icon = category_icon(category.id, "h-8 w-8"),
                label = category.label,
            )
        })
        .collect();

    let count = selection.selected_count();
    let summary = match count {
        0 => String::new(),
        1 => r##"<p class="mt-2 text-sm text-health-700">1 category selected</p>"##.to_string(),
        n => format!(r##"<p class="mt-2 text-sm text-health-700">{n} categories selected</p>"##),
    };

    format!(
        r##"<div id="symptom-grid">
    <div class="grid grid-cols-2 gap-3 sm:grid-cols-5">{tiles}</div>{summary}
</div>"##
    )
}

fn info_list(title: &str, items: &[&str]) -> String {
    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!(
        r##"<div><h4 class="mb-2 font-semibold text-gray-900">{title}</h4><ul class="list-disc space-y-1 pl-5 text-sm text-gray-600">{lis}</ul></div>"##
    )
}

/// Detail panel for the last hovered category, or an empty slot.
///
/// The panel stays open until its close button is pressed.
pub fn info_panel(session_id: &str, category: Option<&SymptomCategory>) -> String {
    let Some(category) = category else {
        return r##"<div id="symptom-info"></div>"##.to_string();
    };
    format!(
        r##"<div id="symptom-info" class="mt-6 rounded-lg border border-health-100 bg-health-50/50 p-6" data-category="{cid}">
    <div class="mb-4 flex items-center gap-3">{icon}<h3 class="flex-1 text-lg font-semibold">{label}</h3>
        <button type="button" class="rounded-md p-1 text-gray-500 hover:bg-health-100 hover:text-gray-700" aria-label="Close details"
                hx-delete="/api/sessions/{id}/symptoms/info" hx-target="#symptom-info" hx-swap="outerHTML">{close}</button>
    </div>
    <p class="mb-6 text-gray-700">{description}</p>
    <div class="grid gap-6 md:grid-cols-2">{causes}{risks}{precautions}{prevention}</div>
    <div class="mt-6">{medications}</div>
    <p class="mt-4 text-xs text-gray-500">Medication information is for reference only. Always consult a healthcare professional before taking any medication.</p>
</div>"##,
        id = escape_html(session_id),
        cid = category.id,
        icon = category_icon(category.id, "h-6 w-6 text-health-600"),
        close = icons::close("h-4 w-4"),
        label = category.label,
        description = escape_html(category.description),
        causes = info_list("Common Causes", category.causes),
        risks = info_list("Risk Factors", category.risk_factors),
        precautions = info_list("Precautions", category.precautions),
        prevention = info_list("Preventive Measures", category.preventive_measures),
        medications = info_list("Common Medications", category.medications),
    )
}

/// Full "Describe Your Symptoms" card.
pub fn symptom_form(session_id: &str, selection: &SymptomSelection) -> String {
    let id = escape_html(session_id);
    format!(
        r##"<div class="rounded-xl border border-gray-200 bg-white p-6 shadow-sm md:p-8">
    <h2 class="mb-2 text-2xl font-bold">Describe Your Symptoms</h2>
    <p class="mb-6 text-gray-600">Select the categories that match what you are experiencing. Hover over a category to learn more.</p>
    {grid}
    {info}
    <form class="mt-6 space-y-4" hx-post="/api/sessions/{id}/symptoms/submit" hx-target="#notices" hx-swap="beforeend">
        <label for="symptom-description" class="block text-sm font-medium text-gray-700">Additional details</label>
        <textarea id="symptom-description" name="description" rows="4"
                  placeholder="Please describe your symptoms in detail. Include when they started, their severity, and any other relevant information."
                  class="w-full rounded-lg border border-gray-200 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-health-500"></textarea>
        <button type="submit" class="{button} w-full">Request Consultation</button>
    </form>
</div>"##,
        grid = symptom_grid(session_id, selection),
        info = info_panel(session_id, selection.showing()),
        button = button_classes(ButtonVariant::Primary, ButtonSize::Lg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_marks_selected_tiles() {
        let mut selection = SymptomSelection::new();
        selection.toggle("brain").unwrap();
        let html = symptom_grid("s1", &selection);
        assert_eq!(html.matches(r##"aria-pressed="true""##).count(), 1);
        assert_eq!(html.matches(r##"aria-pressed="false""##).count(), 4);
        assert!(html.contains("1 category selected"));
    }

    #[test]
    fn test_info_panel_lists_sections() {
        let html = info_panel("s1", crate::symptoms::catalog::find("heart"));
        for heading in [
            "Common Causes",
            "Risk Factors",
            "Precautions",
            "Preventive Measures",
            "Common Medications",
        ] {
            assert!(html.contains(heading), "missing {heading}");
        }
        assert!(html.contains("Beta blockers"));
        assert_eq!(info_panel("s1", None), r##"<div id="symptom-info"></div>"##);
    }

    #[test]
    fn test_info_panel_closes_only_on_request() {
        let grid = symptom_grid("s1", &SymptomSelection::new());
        assert!(!grid.contains("mouseleave"));
        assert!(!grid.contains("hx-delete"));

        let panel = info_panel("s1", crate::symptoms::catalog::find("heart"));
        assert!(panel.contains(r##"aria-label="Close details""##));
        assert!(panel.contains(r##"hx-delete="/api/sessions/s1/symptoms/info""##));
    }
}
