//! Active-language ownership.
//!
//! `LanguageSync` is the only place the active language changes. Readers
//! get it through [`LanguageSync::current`]. Two transitions exist: a
//! navigation resynchronises the language from the URL, and an explicit
//! switch moves to the same page in another language.

use crate::i18n::{detect_language, Language};
use crate::routing::{RouteMetrics, RouteTable};
use serde::Serialize;
use tracing::debug;

/// Result of a navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// The URL language already matched the active language
    InSync,
    /// The active language was updated to match the URL
    Resynced { from: Language, to: Language },
}

impl SyncOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, SyncOutcome::Resynced { .. })
    }
}

/// Owner of the active language.
#[derive(Debug, Clone)]
pub struct LanguageSync {
    active: Language,
}

impl LanguageSync {
    pub fn new(initial: Language) -> Self {
        Self { active: initial }
    }

    /// The current active language.
    pub fn current(&self) -> Language {
        self.active
    }

    /// Resynchronise the active language with the language a URL is served in.
    ///
    /// URL wins: the active language never rewrites the URL here.
    pub fn sync_from_path(&mut self, path: &str) -> SyncOutcome {
        let detected = detect_language(path);
        if detected == self.active {
            return SyncOutcome::InSync;
        }

        let from = self.active;
        self.active = detected;
        RouteMetrics::global().record_language_resync();
        debug!("Active language resynced from URL {}: {} -> {}", path, from, detected);

        SyncOutcome::Resynced { from, to: detected }
    }

    /// Switch to `target`, returning the equivalent of `current_path` to redirect to.
    ///
    /// The path is interpreted in the active language, not the detected one.
    pub fn switch_language(
        &mut self,
        table: &RouteTable,
        current_path: &str,
        target: Language,
    ) -> String {
        let new_path = table.translate(current_path, self.active, target);
        debug!(
            "Language switch {} -> {}: {} => {}",
            self.active, target, current_path, new_path
        );
        self.active = target;
        new_path
    }
}
