use crate::i18n::{Language, SyncOutcome};
use crate::routing::{Alternate, RouteKey, RouteParam};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response type for health check endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub routes: usize,
}

/// One route with its template in every language
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub route: RouteKey,
    pub paths: BTreeMap<Language, &'static str>,
}

/// Query parameters carrying a single site path
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub path: Option<String>,
}

/// Query parameters for the translate endpoint
#[derive(Debug, Deserialize)]
pub struct TranslateQuery {
    pub path: Option<String>,
    /// Defaults to the language detected from `path`
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub from: Language,
    pub to: Language,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetectResponse {
    pub path: String,
    pub language: Language,
}

/// Query parameters for the language switch redirect
#[derive(Debug, Deserialize)]
pub struct SwitchQuery {
    pub path: Option<String>,
    pub to: Option<String>,
}

/// A site page resolved from the request path
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub route: RouteKey,
    pub language: Language,
    pub params: Vec<RouteParam>,
    pub alternates: Vec<Alternate>,
    pub sync: SyncOutcome,
}

/// A request path that is no site page
#[derive(Debug, Serialize)]
pub struct PageNotFoundResponse {
    pub error: String,
    pub language: Language,
    pub home: &'static str,
    pub sync: SyncOutcome,
}
