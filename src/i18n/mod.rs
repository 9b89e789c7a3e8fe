//! Internationalization (i18n) module for the site's languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: The closed `Language` enum
//! - `detect`: URL-prefix language detection
//! - `sync`: Ownership of the active language and URL → language resynchronisation
//!
//! # Example
//!
//! ```rust,ignore
//! use msc_localized_routes::i18n::{detect_language, Language, LanguageSync};
//!
//! let mut sync = LanguageSync::new(Language::English);
//! sync.sync_from_path("/it/contatti");
//! assert_eq!(sync.current(), Language::Italian);
//! ```

mod detect;
mod language;
mod registry;
mod sync;

pub use detect::detect_language;
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use sync::{LanguageSync, SyncOutcome};
