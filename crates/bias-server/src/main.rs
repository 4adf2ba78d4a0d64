mod analyzer;
mod api;
mod config;
mod error;
mod inference;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::analyzer::Analyzer;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bias_server=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();

    println!("================================================");
    println!("      HEADLINE BIAS ANALYZER - Starting Up      ");
    println!("================================================");

    let config = AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    println!("[CONFIG] Server: {}:{}", config.server.host, config.server.port);
    println!("[CONFIG] Inference API: {}", config.inference.api_url);
    println!("[CONFIG] Sentiment model: {}", config.inference.sentiment_model);
    println!("[CONFIG] NER model: {}", config.inference.ner_model);
    println!("[CONFIG] Voting threshold: {}", config.voting.threshold);
    if config.inference.api_token.is_empty() {
        println!("[CONFIG] Inference API token: *** EMPTY - set BIAS__INFERENCE__API_TOKEN for hosted models ***");
    } else {
        println!("[CONFIG] Inference API token: set (length: {})", config.inference.api_token.len());
    }

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        threshold = %config.voting.threshold,
        "Starting headline bias analyzer"
    );

    // Models are loaded once and shared by every request
    println!("[MODELS] Loading lexicons and inference client...");
    let analyzer = Analyzer::new(&config)?;
    println!("[MODELS] Ready");

    let state = AppState {
        analyzer: Arc::new(analyzer),
    };

    let app = Router::new()
        .merge(api::create_router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    println!("[ROUTER] Routes configured: /, /analyze, /api/v1/analyze, /health");

    let addr: SocketAddr = config.server_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("================================================");
    println!("  Server listening on http://{}", addr);
    println!("================================================");
    println!();

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
