use crate::i18n::{Language, LanguageRegistry};

/// Classify a URL path into the language it is served in.
///
/// A path belongs to a prefixed language when it is exactly that prefix
/// (`/sq`) or starts with the prefix followed by a slash (`/sq/...`).
/// Everything else, including `/sqx` and the empty string, belongs to the
/// default language.
pub fn detect_language(path: &str) -> Language {
    LanguageRegistry::get()
        .prefixed()
        .find(|(prefix, _)| {
            path.strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
        .map(|(_, language)| language)
        .unwrap_or_else(Language::default_language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_default() {
        assert_eq!(detect_language("/"), Language::English);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn test_prefix_with_and_without_trailing_slash() {
        assert_eq!(detect_language("/sq"), Language::Albanian);
        assert_eq!(detect_language("/sq/"), Language::Albanian);
        assert_eq!(detect_language("/it"), Language::Italian);
        assert_eq!(detect_language("/it/"), Language::Italian);
    }

    #[test]
    fn test_nested_prefixed_paths() {
        assert_eq!(detect_language("/sq/rreth-nesh/"), Language::Albanian);
        assert_eq!(detect_language("/it/servizi/iso/iso-9001"), Language::Italian);
    }

    #[test]
    fn test_prefix_lookalikes_are_default() {
        assert_eq!(detect_language("/sqa"), Language::English);
        assert_eq!(detect_language("/items"), Language::English);
        assert_eq!(detect_language("sq/"), Language::English);
        assert_eq!(detect_language("/about-us/it"), Language::English);
    }

    #[test]
    fn test_unprefixed_paths_are_default() {
        assert_eq!(detect_language("/services/iso"), Language::English);
        assert_eq!(detect_language("/this/path/does/not/exist"), Language::English);
    }
}
