use crate::endpoints;
use crate::handlers::{
    alternates_handler, build_path_handler, detect_handler, health_handler, languages_handler,
    list_routes_handler, metrics_handler, page_handler, switch_language_handler, translate_handler,
};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the service router. Unmatched paths are treated as site pages.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(health_handler))
        .route(endpoints::LANGUAGES, get(languages_handler))
        .route(endpoints::ROUTES, get(list_routes_handler))
        .route(endpoints::ROUTE_ITEM, get(build_path_handler))
        .route(endpoints::TRANSLATE, get(translate_handler))
        .route(endpoints::DETECT, get(detect_handler))
        .route(endpoints::ALTERNATES, get(alternates_handler))
        .route(endpoints::METRICS, get(metrics_handler))
        .route(endpoints::SWITCH_LANGUAGE, get(switch_language_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
