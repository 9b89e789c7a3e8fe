//! Language type: the closed set of languages the site renders in.

use crate::error::RouteError;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported site language.
///
/// Serialized as its ISO 639-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "sq")]
    Albanian,
    #[serde(rename = "it")]
    Italian,
}

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 3] = [Language::English, Language::Albanian, Language::Italian];

    /// Create a Language from a language code string.
    ///
    /// # Example
    /// ```ignore
    /// let albanian = Language::from_code("sq")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language, RouteError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.language)
            .ok_or_else(|| RouteError::UnknownLanguage(code.to_string()))
    }

    /// Get the default language (the one served without a URL prefix).
    pub fn default_language() -> Language {
        LanguageRegistry::get().default_language().language
    }

    /// Position of this language in [`Language::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Albanian => 1,
            Language::Italian => 2,
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// Get the full language configuration from the registry.
    pub fn config(self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(self)
    }

    /// Get the English name of the language.
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_each_language() {
        assert_eq!(Language::from_code("en").unwrap(), Language::English);
        assert_eq!(Language::from_code("sq").unwrap(), Language::Albanian);
        assert_eq!(Language::from_code("it").unwrap(), Language::Italian);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown language"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_parse_via_from_str() {
        let language: Language = "it".parse().unwrap();
        assert_eq!(language, Language::Italian);
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert!(Language::English.is_default());
        assert!(!Language::Albanian.is_default());
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Language::English.native_name(), "English");
        assert_eq!(Language::Albanian.native_name(), "Shqip");
        assert_eq!(Language::Italian.native_name(), "Italiano");
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, language) in Language::ALL.iter().enumerate() {
            assert_eq!(language.index(), i);
        }
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::Albanian).unwrap();
        assert_eq!(json, "\"sq\"");

        let parsed: Language = serde_json::from_str("\"it\"").unwrap();
        assert_eq!(parsed, Language::Italian);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Italian.to_string(), "it");
    }
}
