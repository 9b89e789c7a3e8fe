//! Route translation: the same page in another language.

use crate::i18n::{detect_language, Language};
use crate::routing::{RouteKey, RouteMetrics, RouteTable};
use serde::Serialize;
use tracing::debug;

/// One captured placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParam {
    /// Placeholder name as written in the matched template
    pub name: &'static str,
    pub value: String,
}

/// A concrete path resolved to its route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub route: RouteKey,
    pub language: Language,
    /// Captured values in left-to-right placeholder order
    pub params: Vec<RouteParam>,
}

/// A page's path in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub language: Language,
    pub path: String,
}

impl RouteTable {
    /// Find the first entry whose `language` template matches `path`.
    pub fn resolve(&self, path: &str, language: Language) -> Option<RouteMatch> {
        self.entries().iter().find_map(|entry| {
            let template = entry.template(language);
            template.captures(path).map(|values| RouteMatch {
                route: entry.key,
                language,
                params: template
                    .placeholders()
                    .zip(values)
                    .map(|(name, value)| RouteParam { name, value })
                    .collect(),
            })
        })
    }

    /// Translate `current_path` from `source` to `target`.
    ///
    /// Captured placeholder values move to the target template by position.
    /// Paths that match no route fall back to the target language's home.
    pub fn translate(&self, current_path: &str, source: Language, target: Language) -> String {
        let metrics = RouteMetrics::global();

        match self.resolve(current_path, source) {
            Some(found) => {
                metrics.record_translation_matched();
                let values: Vec<&str> = found.params.iter().map(|p| p.value.as_str()).collect();
                self.template(found.route, target).render_positional(&values)
            }
            None => {
                metrics.record_translation_fallback();
                debug!(
                    "No '{}' route matches {}, falling back to '{}' home",
                    source, current_path, target
                );
                self.get_path(RouteKey::Home, target).to_string()
            }
        }
    }

    /// The page at `path` in every language, in registry order.
    ///
    /// The source language is detected from the path.
    pub fn alternates(&self, path: &str) -> Vec<Alternate> {
        let source = detect_language(path);
        Language::ALL
            .into_iter()
            .map(|language| Alternate {
                language,
                path: self.translate(path, source, language),
            })
            .collect()
    }
}
