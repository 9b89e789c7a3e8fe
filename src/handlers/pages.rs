//! Site page navigation and language switching.
//!
//! The active language lives in a cookie. Each request seeds a
//! [`LanguageSync`] from it and writes it back when the language changed.

use crate::config::Config;
use crate::error::ApiError;
use crate::i18n::{detect_language, Language, LanguageSync, SyncOutcome};
use crate::models::{PageNotFoundResponse, PageResponse, SwitchQuery};
use crate::routing::RouteKey;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

/// Active language from the request's language cookie, if set and valid.
pub fn language_from_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<Language> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, code)| Language::from_code(code).ok())
}

/// `Set-Cookie` value persisting `language` as the active language.
pub fn language_cookie(config: &Config, language: Language) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        config.language_cookie,
        language.code(),
        u64::from(config.language_cookie_max_age_days) * 24 * 60 * 60
    )
}

fn with_language_cookie(mut response: Response, config: &Config, language: Language) -> Response {
    match HeaderValue::from_str(&language_cookie(config, language)) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(e) => warn!("Cannot encode language cookie '{}': {}", config.language_cookie, e),
    }
    response
}

/// Fallback handler - every path that is not a service endpoint is a site page.
///
/// Navigating resynchronises the active language with the URL.
pub async fn page_handler(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let path = uri.path();
    let initial = language_from_cookie(&headers, &state.config.language_cookie)
        .unwrap_or_else(|| detect_language(path));

    let mut sync = LanguageSync::new(initial);
    let outcome = sync.sync_from_path(path);
    let language = sync.current();

    let response = match state.routes.resolve(path, language) {
        Some(found) => (
            StatusCode::OK,
            Json(PageResponse {
                route: found.route,
                language,
                params: found.params,
                alternates: state.routes.alternates(path),
                sync: outcome,
            }),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(PageNotFoundResponse {
                error: format!("Page not found: {}", path),
                language,
                home: state.routes.get_path(RouteKey::Home, language),
                sync: outcome,
            }),
        )
            .into_response(),
    };

    match outcome {
        SyncOutcome::Resynced { to, .. } => with_language_cookie(response, &state.config, to),
        SyncOutcome::InSync => response,
    }
}

/// GET /switch-language - Explicit language switch
///
/// Redirects to `path` translated into `to` and stores `to` as the active
/// language. `path` is read in the current active language.
pub async fn switch_language_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SwitchQuery>,
) -> Result<Response, ApiError> {
    let path = query.path.ok_or(ApiError::MissingQueryParam("path"))?;
    let target = Language::from_code(query.to.as_deref().ok_or(ApiError::MissingQueryParam("to"))?)?;

    let initial = language_from_cookie(&headers, &state.config.language_cookie)
        .unwrap_or_else(|| detect_language(&path));
    let mut sync = LanguageSync::new(initial);
    let new_path = sync.switch_language(&state.routes, &path, target);

    info!("Language switch to '{}': {} => {}", target, path, new_path);

    // Captured segments come from user input and may hold bytes a header cannot carry
    let location = HeaderValue::from_str(&new_path)
        .map_err(|_| ApiError::InvalidRedirect(new_path.clone()))?;
    let response = (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response();
    Ok(with_language_cookie(response, &state.config, sync.current()))
}
