mod routes;

use std::path::PathBuf;

use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let state = AppState::from_env();
    if !state.site_dir.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html; build the site before serving it",
            state.site_dir.display()
        );
    }

    let app = routes::app(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind {bind_addr}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on {bind_addr}");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

#[derive(Clone)]
pub struct AppState {
    /// Built site (index.html, wasm bundle, assets).
    pub site_dir: PathBuf,
    /// Catalogue PDFs, served under /catalogues.
    pub catalogue_dir: PathBuf,
}

impl AppState {
    pub fn from_env() -> Self {
        let site_dir = std::env::var("SITE_DIR").unwrap_or_else(|_| "dist".to_string());
        let catalogue_dir =
            std::env::var("CATALOGUE_DIR").unwrap_or_else(|_| "public/catalogues".to_string());
        Self {
            site_dir: PathBuf::from(site_dir),
            catalogue_dir: PathBuf::from(catalogue_dir),
        }
    }
}
