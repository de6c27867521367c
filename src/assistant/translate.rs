//! Placeholder translation.
//!
//! No text is translated. Replies for a non-default language are tagged
//! with the language name so the picker has a visible effect.

use super::language::Language;

pub trait Translator: Send + Sync + std::fmt::Debug {
    fn translate(&self, text: &str, target: Language) -> String;
}

/// Appends `[Translated to <Name>]` for any non-default language.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelTranslator;

impl Translator for LabelTranslator {
    fn translate(&self, text: &str, target: Language) -> String {
        if target.is_default() {
            text.to_string()
        } else {
            format!("{text} [Translated to {}]", target.name)
        }
    }
}
