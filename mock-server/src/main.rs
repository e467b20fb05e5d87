use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mock_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let seed: usize = match std::env::var("SEED_LISTINGS") {
        Ok(raw) => raw.parse().context("SEED_LISTINGS must be a non-negative integer")?,
        Err(_) => 0,
    };

    let mut rng = rand::thread_rng();
    let listings = (0..seed)
        .map(|_| mock_server::generator::generate_listing(&mut rng))
        .collect();

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, seed, "listening");
    mock_server::run_with(listener, listings).await?;
    Ok(())
}
