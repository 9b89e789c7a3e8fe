//! Route table API: lookups, link building and translation.

use crate::error::ApiError;
use crate::i18n::{detect_language, Language, LanguageConfig, LanguageRegistry};
use crate::models::{DetectResponse, PathQuery, RouteSummary, TranslateQuery, TranslateResponse};
use crate::routing::{Alternate, BuiltPath, MetricsReport, RouteKey, RouteMetrics};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;

/// GET /api/languages - Supported languages in registry order
pub async fn languages_handler() -> Json<Vec<&'static LanguageConfig>> {
    Json(LanguageRegistry::get().list_all())
}

/// GET /api/routes - Every route with its template in each language
pub async fn list_routes_handler(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let summaries = state
        .routes
        .entries()
        .iter()
        .map(|entry| RouteSummary {
            route: entry.key,
            paths: Language::ALL
                .into_iter()
                .map(|language| (language, entry.template(language).raw()))
                .collect(),
        })
        .collect();

    Json(summaries)
}

/// GET /api/routes/:key - Build a link
///
/// `lang` selects the language (default language when absent); every other
/// query parameter fills the placeholder of the same name.
pub async fn build_path_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Json<BuiltPath>, ApiError> {
    let key: RouteKey = key.parse()?;
    let language = match params.remove("lang") {
        Some(code) => Language::from_code(&code)?,
        None => Language::default_language(),
    };

    Ok(Json(state.routes.build_path(key, language, &params)))
}

/// GET /api/translate - The same page in another language
pub async fn translate_handler(
    State(state): State<AppState>,
    Query(query): Query<TranslateQuery>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let path = query.path.ok_or(ApiError::MissingQueryParam("path"))?;
    let to = Language::from_code(query.to.as_deref().ok_or(ApiError::MissingQueryParam("to"))?)?;
    let from = match query.from {
        Some(code) => Language::from_code(&code)?,
        None => detect_language(&path),
    };

    let translated = state.routes.translate(&path, from, to);
    tracing::debug!("Translated {} ({} -> {}) to {}", path, from, to, translated);

    Ok(Json(TranslateResponse {
        from,
        to,
        path: translated,
    }))
}

/// GET /api/detect - Language a path is served in
pub async fn detect_handler(Query(query): Query<PathQuery>) -> Result<Json<DetectResponse>, ApiError> {
    let path = query.path.ok_or(ApiError::MissingQueryParam("path"))?;
    let language = detect_language(&path);

    Ok(Json(DetectResponse { path, language }))
}

/// GET /api/alternates - A page's path in every language
pub async fn alternates_handler(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<Vec<Alternate>>, ApiError> {
    let path = query.path.ok_or(ApiError::MissingQueryParam("path"))?;
    Ok(Json(state.routes.alternates(&path)))
}

/// GET /api/metrics - Route resolution counters
pub async fn metrics_handler() -> Json<MetricsReport> {
    Json(RouteMetrics::global().report())
}
