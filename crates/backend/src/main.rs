pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::dashboards::d400_sales_overview::service::SalesSnapshot;
use crate::shared::config;
use crate::shared::data::source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = config::load_config()?;

    let records = match config::get_data_path(&config) {
        Some(path) => source::load_records(&path)
            .map_err(|e| anyhow::anyhow!("failed to load sales data: {e}"))?,
        None => source::sample_records()?,
    };

    let snapshot = SalesSnapshot::build(records);
    let state = AppState::new(snapshot, config.dashboard.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

/// Console + file logging, filtered by RUST_LOG
fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// Request log line: status, method, path, body size, elapsed time
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .map(shared::format::format_number)
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        "{} | {:>5}ms | {:>9} | {} {}",
        response.status().as_u16(),
        start.elapsed().as_millis(),
        size,
        method,
        uri.path()
    );

    response
}
