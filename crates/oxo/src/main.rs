use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use oxo_registry::RoomRegistry;
use tracing_subscriber::EnvFilter;

/// Port used when the `PORT` environment variable is absent or invalid.
const DEFAULT_PORT: u16 = 5100;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let registry = Arc::new(RoomRegistry::new());
    let app = oxo::router(registry);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "oxo server listening");
    axum::serve(listener, app).await
}
