//! Legal strategy REST server
//!
//! ## Usage
//!
//! ```bash
//! # Deterministic templates (default)
//! cargo run --bin strategy_server
//!
//! # OpenAI-backed
//! MODEL_PROVIDER=openai OPENAI_API_KEY=sk-... cargo run --bin strategy_server
//!
//! curl -X POST http://localhost:8001/api/strategy \
//!   -H "Content-Type: application/json" \
//!   -d '{"case_description": "My employer terminated my contract without notice."}'
//!
//! curl http://localhost:8001/api/health
//! ```
//!
//! See `legal_strategy_advisor::config` for the environment variables read
//! at startup.

use anyhow::Context;
use tokio::net::TcpListener;

use legal_strategy_advisor::{build_provider, build_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,legal_strategy_advisor=debug,tower_http=debug".into()),
        )
        .init();

    let settings = Settings::from_env().context("invalid configuration")?;
    let provider = build_provider(&settings)?;
    let app = build_router(AppState::new(provider), &settings.cors_origins);

    let bind_addr = settings.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;

    tracing::info!("Starting Legal Strategy AI Service on {}", bind_addr);
    tracing::info!("AI Provider: {}", settings.provider);

    axum::serve(listener, app).await?;

    Ok(())
}
