use std::net::SocketAddr;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, Level};

use wealth_tracker_backend::{create_router, initialize_backend};

/// How often the background task prunes expired sync codes
const SWEEP_INTERVAL: Duration = Duration::from_secs(600);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000);

    let state = initialize_backend();
    let app = create_router(state.clone());

    // Lazy eviction keeps reads correct; the sweep just bounds memory
    let sweep_store = state.sync_store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let swept = sweep_store.sweep_expired(Utc::now());
            if swept > 0 {
                info!("Swept {} expired sync code(s)", swept);
            }
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Starting sync server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
