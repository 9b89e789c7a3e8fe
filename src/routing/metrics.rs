//! Route resolution metrics.
//!
//! Process-wide counters for translations, fallbacks, path building and
//! language resyncs.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global route metrics singleton.
pub struct RouteMetrics {
    /// Translations that matched a route entry
    translations_matched: AtomicUsize,

    /// Translations that fell back to the home route
    translations_fallback: AtomicUsize,

    /// Paths built from a route key
    paths_built: AtomicUsize,

    /// Built paths that kept at least one literal placeholder
    unresolved_placeholders: AtomicUsize,

    /// Active-language changes triggered by navigation
    language_resyncs: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<RouteMetrics> = OnceLock::new();

impl RouteMetrics {
    /// Get the global route metrics instance.
    pub fn global() -> &'static RouteMetrics {
        METRICS.get_or_init(|| RouteMetrics {
            translations_matched: AtomicUsize::new(0),
            translations_fallback: AtomicUsize::new(0),
            paths_built: AtomicUsize::new(0),
            unresolved_placeholders: AtomicUsize::new(0),
            language_resyncs: AtomicUsize::new(0),
        })
    }

    /// Record a translation that matched a route entry.
    pub fn record_translation_matched(&self) {
        self.translations_matched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a translation that fell back to the home route.
    pub fn record_translation_fallback(&self) {
        self.translations_fallback.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a path built from a route key.
    pub fn record_path_built(&self) {
        self.paths_built.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a built path that kept a literal placeholder.
    pub fn record_unresolved_placeholder(&self) {
        self.unresolved_placeholders.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an active-language change caused by navigation.
    pub fn record_language_resync(&self) {
        self.language_resyncs.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the number of matched translations.
    pub fn translations_matched(&self) -> usize {
        self.translations_matched.load(Ordering::Relaxed)
    }

    /// Get the number of translations that fell back to home.
    pub fn translations_fallback(&self) -> usize {
        self.translations_fallback.load(Ordering::Relaxed)
    }

    /// Get the number of paths built.
    pub fn paths_built(&self) -> usize {
        self.paths_built.load(Ordering::Relaxed)
    }

    /// Get the number of built paths with unresolved placeholders.
    pub fn unresolved_placeholders(&self) -> usize {
        self.unresolved_placeholders.load(Ordering::Relaxed)
    }

    /// Get the number of navigation-triggered language changes.
    pub fn language_resyncs(&self) -> usize {
        self.language_resyncs.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let matched = self.translations_matched();
        let fallback = self.translations_fallback();
        let total = matched + fallback;
        let translation_match_rate = if total > 0 {
            (matched as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            translations_matched: matched,
            translations_fallback: fallback,
            translation_match_rate,
            paths_built: self.paths_built(),
            unresolved_placeholders: self.unresolved_placeholders(),
            language_resyncs: self.language_resyncs(),
        }
    }
}

/// Snapshot of the route metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub translations_matched: usize,
    pub translations_fallback: usize,

    /// Matched translations as a percentage (0-100) of all translations
    pub translation_match_rate: f64,

    pub paths_built: usize,
    pub unresolved_placeholders: usize,
    pub language_resyncs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are process-wide and other tests bump them concurrently, so
    // these assert on growth rather than exact values.

    #[test]
    fn test_record_translation_counters() {
        let metrics = RouteMetrics::global();
        let matched = metrics.translations_matched();
        let fallback = metrics.translations_fallback();

        metrics.record_translation_matched();
        metrics.record_translation_fallback();

        assert!(metrics.translations_matched() > matched);
        assert!(metrics.translations_fallback() > fallback);
    }

    #[test]
    fn test_record_path_counters() {
        let metrics = RouteMetrics::global();
        let built = metrics.paths_built();
        let unresolved = metrics.unresolved_placeholders();

        metrics.record_path_built();
        metrics.record_unresolved_placeholder();

        assert!(metrics.paths_built() > built);
        assert!(metrics.unresolved_placeholders() > unresolved);
    }

    #[test]
    fn test_record_language_resync() {
        let metrics = RouteMetrics::global();
        let before = metrics.language_resyncs();

        metrics.record_language_resync();

        assert!(metrics.language_resyncs() > before);
    }

    #[test]
    fn test_report_rate_in_range() {
        let metrics = RouteMetrics::global();
        metrics.record_translation_matched();

        let report = metrics.report();
        assert!(report.translation_match_rate > 0.0);
        assert!(report.translation_match_rate <= 100.0);
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(RouteMetrics::global().report()).unwrap();

        assert!(json.get("translations_matched").is_some());
        assert!(json.get("translation_match_rate").is_some());
        assert!(json.get("language_resyncs").is_some());
    }
}
