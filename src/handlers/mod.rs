pub mod health;
pub mod pages;
pub mod routes;

pub use health::health_handler;
pub use pages::{page_handler, switch_language_handler};
pub use routes::{
    alternates_handler, build_path_handler, detect_handler, languages_handler, list_routes_handler,
    metrics_handler, translate_handler,
};
