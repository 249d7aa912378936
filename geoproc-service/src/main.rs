//! Geo-Processor Service - HTTP microservice for bounds and centroids.
//!
//! Accepts a list of latitude/longitude points and returns their bounding
//! box and arithmetic-mean centroid.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GEOPROC_HOST` | Bind address | 0.0.0.0 |
//! | `GEOPROC_PORT` | HTTP server port | 8000 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /` - Welcome message
//! - `POST /process` - Bounds and centroid of `{"points": [{"lat", "lng"}, ...]}`
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use geoproc_service::{app, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoproc_service=info,geoproc=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();
    let addr = config.socket_addr();

    tracing::info!(
        host = %config.host,
        port = config.port,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Geo-Processor service"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app()).await?;

    Ok(())
}
