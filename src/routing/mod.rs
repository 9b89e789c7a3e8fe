//! Localized routing: per-language URL templates for every page.
//!
//! - `key`: the closed set of logical pages
//! - `data`: the built-in per-language templates
//! - `template`: template parsing, matching and substitution
//! - `table`: the validated, immutable route table
//! - `translate`: path → route resolution and cross-language translation
//! - `builder`: route key → path, with parameter diagnostics
//! - `validator`: load-time table checks
//! - `metrics`: resolution counters

mod builder;
mod data;
mod key;
mod metrics;
mod table;
mod template;
mod translate;
mod validator;

pub use builder::BuiltPath;
pub use data::{RouteDefinition, SITE_ROUTES};
pub use key::RouteKey;
pub use metrics::{MetricsReport, RouteMetrics};
pub use table::{RouteEntry, RouteTable};
pub use template::{PathTemplate, Segment};
pub use translate::{Alternate, RouteMatch, RouteParam};
pub use validator::{RouteTableValidator, ValidationReport};
