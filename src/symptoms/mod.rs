//! Symptom selector state.
//!
//! A page view keeps a set of selected category ids and an optional
//! "currently shown" category for the detail panel. Submitting sends
//! nothing anywhere; it only validates and produces a notice.

pub mod catalog;

use std::collections::HashSet;

use crate::error::{AppError, ValidationError};
use crate::events::Notice;

pub use catalog::{CATALOG, SymptomCategory};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSelection {
    selected: HashSet<&'static str>,
    showing: Option<&'static str>,
    description: String,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present.
    ///
    /// Returns whether the category is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> Result<bool, AppError> {
        let category = lookup(id)?;
        if self.selected.remove(category.id) {
            Ok(false)
        } else {
            self.selected.insert(category.id);
            Ok(true)
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected categories in catalog order.
    pub fn selected(&self) -> Vec<&'static SymptomCategory> {
        CATALOG
            .iter()
            .filter(|category| self.selected.contains(category.id))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Point the detail panel at `id`.
    pub fn show(&mut self, id: &str) -> Result<&'static SymptomCategory, AppError> {
        let category = lookup(id)?;
        self.showing = Some(category.id);
        Ok(category)
    }

    pub fn dismiss(&mut self) {
        self.showing = None;
    }

    /// Description from the last accepted request.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn showing(&self) -> Option<&'static SymptomCategory> {
        self.showing.and_then(catalog::find)
    }

    /// Validate a consultation request.
    ///
    /// Needs at least one selected category or a non-blank description.
    pub fn submit(&mut self, description: &str) -> Result<Notice, ValidationError> {
        if self.selected.is_empty() && description.trim().is_empty() {
            return Err(ValidationError::EmptySymptoms);
        }
        self.description = description.to_string();
        Ok(Notice::success(
            "Consultation request sent",
            "A doctor will review your symptoms shortly.",
        ))
    }
}

fn lookup(id: &str) -> Result<&'static SymptomCategory, AppError> {
    catalog::find(id).ok_or_else(|| AppError::UnknownCategory(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = SymptomSelection::new();
        selection.toggle("brain").unwrap();
        let before = selection.clone();

        for id in ["heart", "fever", "brain"] {
            selection.toggle(id).unwrap();
            selection.toggle(id).unwrap();
            assert_eq!(selection, before, "toggling {id} twice");
        }
    }

    #[test]
    fn test_toggle_reports_membership() {
        let mut selection = SymptomSelection::new();
        assert!(selection.toggle("digestive").unwrap());
        assert!(selection.is_selected("digestive"));
        assert!(!selection.toggle("digestive").unwrap());
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_selected_uses_catalog_order() {
        let mut selection = SymptomSelection::new();
        for id in ["fever", "heart", "bone"] {
            selection.toggle(id).unwrap();
        }
        let ids: Vec<_> = selection.selected().iter().map(|c| c.id).collect();
        assert_eq!(ids, ["heart", "bone", "fever"]);
    }

    #[test]
    fn test_unknown_category() {
        let mut selection = SymptomSelection::new();
        assert!(matches!(
            selection.toggle("lungs"),
            Err(AppError::UnknownCategory(id)) if id == "lungs"
        ));
        assert!(selection.show("lungs").is_err());
    }

    #[test]
    fn test_show_and_dismiss() {
        let mut selection = SymptomSelection::new();
        assert!(selection.showing().is_none());

        selection.show("bone").unwrap();
        assert_eq!(selection.showing().unwrap().label, "Musculoskeletal");

        selection.show("heart").unwrap();
        assert_eq!(selection.showing().unwrap().id, "heart");

        selection.dismiss();
        assert!(selection.showing().is_none());
    }

    #[test]
    fn test_submit_requires_selection_or_description() {
        let mut selection = SymptomSelection::new();
        assert_eq!(
            selection.submit("   \n").unwrap_err(),
            ValidationError::EmptySymptoms
        );

        let notice = selection.submit("sore throat since Monday").unwrap();
        assert_eq!(notice.title, "Consultation request sent");
        assert_eq!(selection.description(), "sore throat since Monday");

        selection.toggle("fever").unwrap();
        assert!(selection.submit("").is_ok());
    }
}
