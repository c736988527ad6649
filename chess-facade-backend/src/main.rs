use anyhow::Context;
use chess_facade_backend::{config::Config, create_app};
use lichess_client::{Endpoints, LichessClient};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for structured logging, RUST_LOG wins when set
    #[cfg(debug_assertions)]
    let log_level = tracing::Level::DEBUG;
    #[cfg(not(debug_assertions))]
    let log_level = tracing::Level::INFO;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level.into())),
        )
        .with_target(false)
        .compact()
        .init();
    tracing::info!("Starting chess facade server...");

    let config = Config::from_env();
    tracing::info!(
        "Configuration: port={}, timeout={}s, lichess={}",
        config.port,
        config.request_timeout.as_secs(),
        config.lichess_base_url
    );

    let lichess = LichessClient::new(Endpoints::new(config.lichess_base_url.clone()));
    let app = create_app(lichess, config.request_timeout);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("axum server error")?;
    Ok(())
}
