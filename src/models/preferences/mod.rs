// The single persisted user preference.

use serde::{Deserialize, Serialize};

use crate::models::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
        }
    }
}

impl Preferences {
    /// The stored code, leniently parsed; unknown codes resolve to the
    /// default language.
    pub fn language(&self) -> Language {
        Language::resolve(&self.language)
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language.code().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_french() {
        assert_eq!(Preferences::default().language(), Language::French);
    }

    #[test]
    fn stored_garbage_resolves_to_default() {
        let prefs = Preferences {
            language: "xx".to_string(),
        };
        assert_eq!(prefs.language(), Language::French);
    }
}
