//! Languages offered by the chat language picker.

use serde::Serialize;

/// A selectable display language.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// All languages, the default first.
pub const LANGUAGES: [Language; 5] = [
    Language {
        code: "en",
        name: "English",
    },
    Language {
        code: "es",
        name: "Spanish",
    },
    Language {
        code: "fr",
        name: "French",
    },
    Language {
        code: "de",
        name: "German",
    },
    Language {
        code: "zh",
        name: "Chinese",
    },
];

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGES.iter().copied().find(|lang| lang.code == code)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for Language {
    fn default() -> Self {
        LANGUAGES[0]
    }
}
