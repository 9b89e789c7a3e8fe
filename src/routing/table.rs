use crate::error::RouteError;
use crate::i18n::Language;
use crate::routing::data::{RouteDefinition, SITE_ROUTES};
use crate::routing::{PathTemplate, RouteKey, RouteTableValidator};
use std::sync::OnceLock;
use tracing::{info, warn};

/// The parsed templates of one route, one per language.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub key: RouteKey,
    templates: [PathTemplate; 3],
}

impl RouteEntry {
    pub fn template(&self, language: Language) -> &PathTemplate {
        &self.templates[language.index()]
    }
}

/// Immutable per-language URL table for every route.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

/// The built-in table (initialized lazily)
static BUILTIN: OnceLock<RouteTable> = OnceLock::new();

impl RouteTable {
    /// The validated built-in site table.
    ///
    /// # Panics
    /// Panics if the built-in data fails validation; covered by
    /// `test_builtin_table_validates_clean`.
    pub fn builtin() -> &'static RouteTable {
        BUILTIN.get_or_init(|| Self::load().expect("built-in route table should be valid"))
    }

    /// Parse and validate the built-in site routes.
    pub fn load() -> Result<Self, RouteError> {
        Self::load_from(SITE_ROUTES, false)
    }

    /// Parse and validate `definitions`.
    ///
    /// Validation errors fail the load. In `strict` mode warnings fail it too.
    pub fn load_from(definitions: &[RouteDefinition], strict: bool) -> Result<Self, RouteError> {
        let table = Self::parse(definitions)?;
        let report = RouteTableValidator::validate(&table);

        for warning in &report.warnings {
            warn!("Route table warning: {}", warning);
        }

        let mut problems = report.errors;
        if strict {
            problems.extend(report.warnings);
        }
        if !problems.is_empty() {
            return Err(RouteError::InvalidTable(problems));
        }

        info!("Loaded route table with {} routes", table.len());
        Ok(table)
    }

    /// Parse templates without validating the table as a whole.
    pub(crate) fn parse(definitions: &[RouteDefinition]) -> Result<Self, RouteError> {
        let entries = definitions
            .iter()
            .map(|def| {
                let [en, sq, it] = def.templates;
                Ok(RouteEntry {
                    key: def.key,
                    templates: [
                        PathTemplate::parse(en)?,
                        PathTemplate::parse(sq)?,
                        PathTemplate::parse(it)?,
                    ],
                })
            })
            .collect::<Result<Vec<_>, RouteError>>()?;

        Ok(Self { entries })
    }

    /// Entries in matching order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn find(&self, key: RouteKey) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// The template of `key` in `language`.
    ///
    /// # Panics
    /// Panics if `key` has no entry. A table that passed validation has an
    /// entry for every key.
    pub fn template(&self, key: RouteKey, language: Language) -> &PathTemplate {
        self.find(key)
            .map(|entry| entry.template(language))
            .expect("validated route table has an entry for every key")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::data::route;

    #[test]
    fn test_builtin_table_validates_clean() {
        let table = RouteTable::load_from(SITE_ROUTES, true).unwrap();
        assert_eq!(table.len(), RouteKey::ALL.len());
    }

    #[test]
    fn test_builtin_is_singleton() {
        assert!(std::ptr::eq(RouteTable::builtin(), RouteTable::builtin()));
    }

    #[test]
    fn test_entries_follow_key_order() {
        let keys: Vec<_> = RouteTable::builtin().entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, RouteKey::ALL.to_vec());
    }

    #[test]
    fn test_template_lookup() {
        let template = RouteTable::builtin().template(RouteKey::CertificateVerify, Language::Albanian);

        assert_eq!(template.raw(), "/sq/certifikata/:secureId");
        assert!(template.is_parameterized());
    }

    #[test]
    fn test_load_rejects_incomplete_table() {
        const PARTIAL: &[RouteDefinition] = &[route(RouteKey::Home, "/", "/sq/", "/it/")];

        let err = RouteTable::load_from(PARTIAL, false).unwrap_err();
        assert!(matches!(err, RouteError::InvalidTable(_)));
        assert!(err.to_string().contains("about"));
    }

    #[test]
    fn test_parse_keeps_definitions_as_given() {
        const PARTIAL: &[RouteDefinition] = &[route(RouteKey::Blog, "/blog", "/sq/blog", "/it/blog")];

        let table = RouteTable::parse(PARTIAL).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.find(RouteKey::Home).is_none());
    }
}
