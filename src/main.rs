use std::sync::Arc;

use hub_onboarding::config::AppConfig;
use hub_onboarding::error::Result;
use hub_onboarding::onboarding::{
    CompletionGate, LaunchRouter, OnboardingRouteState, PageCatalog, onboarding_routes,
};
use hub_onboarding::store::{LibSqlBackend, PreferenceStore};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    // A broken page table is a programming error: refuse to start.
    let catalog = Arc::new(PageCatalog::standard()?);

    eprintln!("Hub onboarding v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Database: {}", config.db_path.display());
    eprintln!("   Preferences: {}", config.prefs_namespace);
    eprintln!("   Pages: {}", catalog.count());
    eprintln!("   API: http://0.0.0.0:{}/api/launch\n", config.http_port);

    // ── Database ─────────────────────────────────────────────────────────
    let store: Arc<dyn PreferenceStore> = Arc::new(LibSqlBackend::new_local(&config.db_path).await?);

    let gate = CompletionGate::with_namespace(store, config.prefs_namespace.clone());
    let router = LaunchRouter::new(gate, catalog);

    let app = onboarding_routes(OnboardingRouteState { router }).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port)).await?;
    tracing::info!(port = config.http_port, "Onboarding server started");
    axum::serve(listener, app).await?;

    Ok(())
}
