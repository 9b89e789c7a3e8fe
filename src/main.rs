use anyhow::{Context, Result};
use msc_localized_routes::{
    app::build_router,
    config::Config,
    routing::{RouteTable, SITE_ROUTES},
    state::AppState,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("msc_localized_routes=info".parse()?),
        )
        .init();

    info!("Starting localized route service");

    let config = Config::from_env()?;
    config.log_startup();

    // Fail fast on inconsistent route data
    let routes = RouteTable::load_from(SITE_ROUTES, config.strict_route_validation)
        .context("Route table failed to load")?;

    let addr = format!("{}:{}", config.service_host, config.port);
    let state = AppState {
        routes: Arc::new(routes),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, build_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
