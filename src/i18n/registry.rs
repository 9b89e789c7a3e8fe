//! Language registry: Single source of truth for all supported site languages.
//!
//! The registry is a `OnceLock` singleton holding metadata for every
//! [`Language`]. The set is closed: languages are never added at runtime.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "sq")
    pub code: &'static str,

    /// English name of the language (e.g., "Albanian")
    pub name: &'static str,

    /// Native name of the language (e.g., "Shqip")
    pub native_name: &'static str,

    /// URL prefix for this language's pages (e.g., "/sq").
    /// `None` for the default language, whose pages live at the site root.
    pub path_prefix: Option<&'static str>,

    /// Whether this is the default language (exactly one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the code is not a supported language
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration for a language.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        // Every variant has an entry; see `test_every_language_has_config`.
        &self.languages[language.index()]
    }

    /// Get all languages in registry order (default language first).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Languages whose pages live under a URL prefix.
    pub fn prefixed(&self) -> impl Iterator<Item = (&'static str, Language)> + '_ {
        self.languages
            .iter()
            .filter_map(|lang| lang.path_prefix.map(|prefix| (prefix, lang.language)))
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Default language configurations, in `Language::ALL` order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            path_prefix: None,
            is_default: true,
        },
        LanguageConfig {
            language: Language::Albanian,
            code: "sq",
            name: "Albanian",
            native_name: "Shqip",
            path_prefix: Some("/sq"),
            is_default: false,
        },
        LanguageConfig {
            language: Language::Italian,
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            path_prefix: Some("/it"),
            is_default: false,
        },
    ]
}
