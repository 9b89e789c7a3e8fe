//! Parsed path templates.
//!
//! A template is a slash-delimited literal path. Whole segments of the form
//! `:name` are placeholders. Parameterized templates carry an anchored regex
//! with one `([^/]+)` capture per placeholder, compiled once at load.

use crate::error::RouteError;
use regex::Regex;
use std::collections::HashMap;

/// One slash-delimited piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    /// Placeholder name, without the leading colon
    Placeholder(&'static str),
}

#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: &'static str,
    segments: Vec<Segment>,
    pattern: Option<Regex>,
}

impl PathTemplate {
    pub fn parse(raw: &'static str) -> Result<Self, RouteError> {
        let segments: Vec<Segment> = raw
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Placeholder(name),
                _ => Segment::Literal(segment),
            })
            .collect();

        let pattern = if segments.iter().any(|s| matches!(s, Segment::Placeholder(_))) {
            let body = segments
                .iter()
                .map(|segment| match segment {
                    Segment::Literal(text) => regex::escape(text),
                    Segment::Placeholder(_) => "([^/]+)".to_string(),
                })
                .collect::<Vec<_>>()
                .join("/");

            let regex = Regex::new(&format!("^{}$", body)).map_err(|source| {
                RouteError::InvalidPattern {
                    template: raw.to_string(),
                    source,
                }
            })?;
            Some(regex)
        } else {
            None
        };

        Ok(Self {
            raw,
            segments,
            pattern,
        })
    }

    /// The literal template text, placeholders included.
    pub fn raw(&self) -> &'static str {
        self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in left-to-right order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    pub fn is_parameterized(&self) -> bool {
        self.pattern.is_some()
    }

    /// Match a concrete path against this template.
    ///
    /// Literal templates match exactly, or with one trailing slash removed
    /// from the template. Parameterized templates match their anchored
    /// pattern. Returns the captured placeholder values in order.
    pub fn captures(&self, path: &str) -> Option<Vec<String>> {
        match &self.pattern {
            Some(pattern) => pattern.captures(path).map(|caps| {
                caps.iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().to_string())
                    .collect()
            }),
            None => {
                let stripped = self.raw.strip_suffix('/').unwrap_or(self.raw);
                (path == self.raw || path == stripped).then(Vec::new)
            }
        }
    }

    /// Substitute placeholders by position: the Nth placeholder takes `values[N]`.
    ///
    /// Placeholders without a value stay in the output as `:name`.
    pub fn render_positional<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut position = 0;
        self.render_with(|name| {
            let value = values.get(position).map(|v| v.as_ref().to_string());
            position += 1;
            value.unwrap_or_else(|| format!(":{}", name))
        })
    }

    /// Substitute placeholders by name.
    ///
    /// Returns the rendered path and the names that had no value. Those
    /// stay in the output as `:name`.
    pub fn render_named(&self, params: &HashMap<String, String>) -> (String, Vec<&'static str>) {
        let mut unresolved = Vec::new();
        let path = self.render_with(|name| match params.get(name) {
            Some(value) => value.clone(),
            None => {
                unresolved.push(name);
                format!(":{}", name)
            }
        });
        (path, unresolved)
    }

    fn render_with(&self, mut fill: impl FnMut(&'static str) -> String) -> String {
        if !self.is_parameterized() {
            return self.raw.to_string();
        }

        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => (*text).to_string(),
                Segment::Placeholder(name) => fill(*name),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_literal_template() {
        let template = PathTemplate::parse("/about-us/").unwrap();

        assert!(!template.is_parameterized());
        assert_eq!(template.placeholders().count(), 0);
        assert_eq!(
            template.segments(),
            &[Segment::Literal(""), Segment::Literal("about-us"), Segment::Literal("")]
        );
    }

    #[test]
    fn test_parse_placeholders_in_order() {
        let template = PathTemplate::parse("/a/:first/b/:second").unwrap();

        assert!(template.is_parameterized());
        assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_lone_colon_is_literal() {
        let template = PathTemplate::parse("/a/:").unwrap();
        assert!(!template.is_parameterized());
    }

    // ==================== Matching Tests ====================

    #[test]
    fn test_literal_matches_exact_and_without_trailing_slash() {
        let template = PathTemplate::parse("/about-us/").unwrap();

        assert_eq!(template.captures("/about-us/"), Some(vec![]));
        assert_eq!(template.captures("/about-us"), Some(vec![]));
        assert_eq!(template.captures("/about-us//"), None);
    }

    #[test]
    fn test_literal_without_trailing_slash_does_not_accept_one() {
        let template = PathTemplate::parse("/contact").unwrap();

        assert_eq!(template.captures("/contact"), Some(vec![]));
        assert_eq!(template.captures("/contact/"), None);
    }

    #[test]
    fn test_parameterized_captures_single_segment() {
        let template = PathTemplate::parse("/certificate/:secureId").unwrap();

        assert_eq!(
            template.captures("/certificate/abc-123"),
            Some(vec!["abc-123".to_string()])
        );
        assert_eq!(template.captures("/certificate/abc/123"), None);
        assert_eq!(template.captures("/certificate/"), None);
        assert_eq!(template.captures("/prefix/certificate/abc"), None);
    }

    #[test]
    fn test_parameterized_escapes_literals() {
        let template = PathTemplate::parse("/v1.0/:id").unwrap();

        assert!(template.captures("/v1.0/x").is_some());
        assert!(template.captures("/v1x0/x").is_none());
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_render_positional_ignores_names() {
        let template = PathTemplate::parse("/it/blog/:articolo").unwrap();

        assert_eq!(template.render_positional(&["my-post"]), "/it/blog/my-post");
    }

    #[test]
    fn test_render_positional_leaves_missing_values() {
        let template = PathTemplate::parse("/a/:x/:y").unwrap();

        assert_eq!(template.render_positional(&["1"]), "/a/1/:y");
    }

    #[test]
    fn test_render_named_reports_unresolved() {
        let template = PathTemplate::parse("/quote/:isoCode").unwrap();

        let (path, unresolved) = template.render_named(&HashMap::new());
        assert_eq!(path, "/quote/:isoCode");
        assert_eq!(unresolved, vec!["isoCode"]);

        let params = HashMap::from([("isoCode".to_string(), "iso-9001".to_string())]);
        let (path, unresolved) = template.render_named(&params);
        assert_eq!(path, "/quote/iso-9001");
        assert!(unresolved.is_empty());
    }

    #[test]
    fn test_render_named_is_exact_token_match() {
        let template = PathTemplate::parse("/a/:idx").unwrap();
        let params = HashMap::from([("id".to_string(), "7".to_string())]);

        let (path, unresolved) = template.render_named(&params);
        assert_eq!(path, "/a/:idx");
        assert_eq!(unresolved, vec!["idx"]);
    }
}
