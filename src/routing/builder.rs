//! Link building from route keys.

use crate::i18n::Language;
use crate::routing::{RouteKey, RouteMetrics, RouteTable};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// A path built from a route key, with diagnostics about the parameters.
///
/// Placeholders without a supplied value are left in `path` as `:name`
/// and listed in `unresolved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltPath {
    pub route: RouteKey,
    pub language: Language,
    pub path: String,
    pub unresolved: Vec<&'static str>,
    /// Supplied parameter names that matched no placeholder, sorted
    pub unused: Vec<String>,
}

impl BuiltPath {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

impl RouteTable {
    /// The literal template of `key` in `language`.
    pub fn get_path(&self, key: RouteKey, language: Language) -> &'static str {
        self.template(key, language).raw()
    }

    /// Every language's template of `key`, in registry order.
    pub fn all_paths(&self, key: RouteKey) -> Vec<&'static str> {
        Language::ALL
            .into_iter()
            .map(|language| self.get_path(key, language))
            .collect()
    }

    /// Build the path of `key` in `language`, filling placeholders by name.
    pub fn build_path(
        &self,
        key: RouteKey,
        language: Language,
        params: &HashMap<String, String>,
    ) -> BuiltPath {
        let template = self.template(key, language);
        let (path, unresolved) = template.render_named(params);

        let mut unused: Vec<String> = params
            .keys()
            .filter(|name| !template.placeholders().any(|p| p == name.as_str()))
            .cloned()
            .collect();
        unused.sort();

        let metrics = RouteMetrics::global();
        metrics.record_path_built();
        if !unresolved.is_empty() {
            metrics.record_unresolved_placeholder();
            warn!(
                "Built path {} for route '{}' ({}) with unresolved placeholders {:?}",
                path, key, language, unresolved
            );
        }

        BuiltPath {
            route: key,
            language,
            path,
            unresolved,
            unused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_path_returns_literal_for_every_pair() {
        let table = RouteTable::builtin();
        for entry in table.entries() {
            for language in Language::ALL {
                assert_eq!(
                    table.get_path(entry.key, language),
                    entry.template(language).raw()
                );
            }
        }
    }

    #[test]
    fn test_get_path_examples() {
        let table = RouteTable::builtin();

        assert_eq!(table.get_path(RouteKey::Home, Language::Albanian), "/sq/");
        assert_eq!(
            table.get_path(RouteKey::StaffTraining, Language::Italian),
            "/it/servizi/formazione-del-personale"
        );
    }

    #[test]
    fn test_all_paths() {
        assert_eq!(
            RouteTable::builtin().all_paths(RouteKey::Faq),
            vec!["/faq", "/sq/pyetje-te-shpeshta", "/it/domande-frequenti"]
        );
    }

    #[test]
    fn test_build_path_fills_placeholder() {
        let built = RouteTable::builtin().build_path(
            RouteKey::CertificateVerify,
            Language::Italian,
            &params(&[("secureId", "a1b2c3")]),
        );

        assert_eq!(built.path, "/it/certificato/a1b2c3");
        assert!(built.is_complete());
        assert!(built.unused.is_empty());
    }

    #[test]
    fn test_build_path_without_params_matches_template() {
        let built =
            RouteTable::builtin().build_path(RouteKey::About, Language::English, &HashMap::new());

        assert_eq!(built.path, "/about-us/");
        assert!(built.is_complete());
    }

    #[test]
    fn test_build_path_reports_missing_param() {
        let metrics = RouteMetrics::global();
        let before = metrics.unresolved_placeholders();

        let built = RouteTable::builtin().build_path(
            RouteKey::QuoteForm,
            Language::Albanian,
            &params(&[("iso", "iso-9001")]),
        );

        assert_eq!(built.path, "/sq/kerkese-oferte/:isoCode");
        assert_eq!(built.unresolved, vec!["isoCode"]);
        assert_eq!(built.unused, vec!["iso".to_string()]);
        assert!(!built.is_complete());
        assert!(metrics.unresolved_placeholders() > before);
    }

    #[test]
    fn test_build_path_reports_unused_on_literal_route() {
        let built = RouteTable::builtin().build_path(
            RouteKey::Contact,
            Language::English,
            &params(&[("b", "2"), ("a", "1")]),
        );

        assert_eq!(built.path, "/contact");
        assert_eq!(built.unused, vec!["a".to_string(), "b".to_string()]);
    }
}
