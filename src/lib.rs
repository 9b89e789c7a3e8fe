//! Localized route resolution for the MSC Certifications website.
//!
//! The library holds the per-language route table, language detection,
//! cross-language translation and link building. The binary serves them
//! over HTTP.

pub mod app;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod routing;
pub mod state;
