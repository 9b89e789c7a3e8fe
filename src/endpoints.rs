// Endpoint path constants - single source of truth for all service paths.
// Every other path is a site page, handled by the fallback.

pub const HEALTH: &str = "/health";
pub const LANGUAGES: &str = "/api/languages";
pub const ROUTES: &str = "/api/routes";
pub const ROUTE_ITEM: &str = "/api/routes/:key";
pub const TRANSLATE: &str = "/api/translate";
pub const DETECT: &str = "/api/detect";
pub const ALTERNATES: &str = "/api/alternates";
pub const METRICS: &str = "/api/metrics";
pub const SWITCH_LANGUAGE: &str = "/switch-language";
