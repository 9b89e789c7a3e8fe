//! Route table validation.
//!
//! Run once at load. It checks that:
//! - every route key has exactly one entry
//! - each entry declares the same number of placeholders in every language,
//!   since translation substitutes them by position
//! - every template is served under its own language's prefix
//! - no two entries' templates in a language accept a common path, since
//!   the first matching entry wins

use crate::i18n::{detect_language, Language};
use crate::routing::{PathTemplate, RouteKey, RouteTable, Segment};

/// Validation report containing errors and warnings about a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make translation or path building wrong
    pub errors: Vec<String>,

    /// Suspicious but workable data
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for route tables.
pub struct RouteTableValidator;

impl RouteTableValidator {
    pub fn validate(table: &RouteTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::check_coverage(table, &mut report);
        Self::check_placeholder_alignment(table, &mut report);
        Self::check_language_prefixes(table, &mut report);
        Self::check_overlaps(table, &mut report);

        report
    }

    fn check_coverage(table: &RouteTable, report: &mut ValidationReport) {
        for key in RouteKey::ALL {
            match table.entries().iter().filter(|entry| entry.key == key).count() {
                0 => report.errors.push(format!("Route '{}' has no entry", key)),
                1 => {}
                n => report
                    .errors
                    .push(format!("Route '{}' is defined {} times", key, n)),
            }
        }
    }

    fn check_placeholder_alignment(table: &RouteTable, report: &mut ValidationReport) {
        let reference = Language::default_language();

        for entry in table.entries() {
            let expected: Vec<_> = entry.template(reference).placeholders().collect();

            for language in Language::ALL {
                let actual: Vec<_> = entry.template(language).placeholders().collect();

                if actual.len() != expected.len() {
                    report.errors.push(format!(
                        "Route '{}' has {} placeholder(s) in '{}' but {} in '{}'",
                        entry.key,
                        actual.len(),
                        language,
                        expected.len(),
                        reference
                    ));
                } else if actual != expected {
                    report.warnings.push(format!(
                        "Route '{}' names its placeholders {:?} in '{}' but {:?} in '{}'; substitution is by position",
                        entry.key, actual, language, expected, reference
                    ));
                }
            }
        }
    }

    fn check_language_prefixes(table: &RouteTable, report: &mut ValidationReport) {
        for entry in table.entries() {
            for language in Language::ALL {
                let template = entry.template(language);
                let detected = detect_language(template.raw());
                if detected != language {
                    report.errors.push(format!(
                        "Route '{}' template '{}' for '{}' is detected as '{}'",
                        entry.key,
                        template.raw(),
                        language,
                        detected
                    ));
                }
            }
        }
    }

    fn check_overlaps(table: &RouteTable, report: &mut ValidationReport) {
        let entries = table.entries();

        for language in Language::ALL {
            for (i, a) in entries.iter().enumerate() {
                for b in entries.iter().skip(i + 1) {
                    let ta = a.template(language);
                    let tb = b.template(language);

                    if ta.raw() == tb.raw() {
                        report.errors.push(format!(
                            "Routes '{}' and '{}' share template '{}' in '{}'",
                            a.key,
                            b.key,
                            ta.raw(),
                            language
                        ));
                    } else if templates_overlap(ta, tb) {
                        report.errors.push(format!(
                            "Routes '{}' ('{}') and '{}' ('{}') overlap in '{}'",
                            a.key,
                            ta.raw(),
                            b.key,
                            tb.raw(),
                            language
                        ));
                    }
                }
            }
        }
    }
}

/// Segment lists a template accepts. Literal templates also accept their
/// text with one trailing slash removed.
fn accepted_shapes(template: &PathTemplate) -> Vec<&[Segment]> {
    let segments = template.segments();
    match segments.split_last() {
        Some((Segment::Literal(""), rest)) if !template.is_parameterized() && !rest.is_empty() => {
            vec![segments, rest]
        }
        _ => vec![segments],
    }
}

/// Whether some path is accepted by both templates.
///
/// A placeholder matches any non-empty segment, so it pairs with another
/// placeholder or a non-empty literal. Literals pair only when equal.
fn templates_overlap(a: &PathTemplate, b: &PathTemplate) -> bool {
    let shapes_b = accepted_shapes(b);
    accepted_shapes(a).into_iter().any(|sa| {
        shapes_b.iter().any(|sb| {
            sa.len() == sb.len()
                && sa.iter().zip(sb.iter()).all(|pair| match pair {
                    (Segment::Placeholder(_), Segment::Placeholder(_)) => true,
                    (Segment::Placeholder(_), Segment::Literal(text))
                    | (Segment::Literal(text), Segment::Placeholder(_)) => !text.is_empty(),
                    (Segment::Literal(x), Segment::Literal(y)) => x == y,
                })
        })
    })
}
