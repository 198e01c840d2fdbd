//! Basekit API Server
//!
//! HTTP API for the Basekit web app: billing endpoints backed by Stripe
//! (subscription lookup, customer sessions for the pricing table, billing
//! portal, per-plan usage).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use basekit_api::{config::Config, routes::create_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,basekit_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Basekit API Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(app_url = %config.app_url, "Configuration loaded");

    // Create application state (billing is optional; see AppState::new)
    let state = AppState::new(config.clone());

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
