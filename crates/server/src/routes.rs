use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use flipbook::content::{self, CATALOGUES, CATEGORIES, PRODUCTS};
use flipbook::types::{Catalogue, Category, Product};
use serde::{Deserialize, Serialize};
use tower_http::services::{ServeDir, ServeFile};

use crate::AppState;

/// API routes plus static hosting of the built site and catalogue PDFs.
pub fn app(state: AppState) -> Router {
    let site = ServeDir::new(&state.site_dir)
        .fallback(ServeFile::new(state.site_dir.join("index.html")));

    Router::new()
        .merge(api_router())
        .nest_service("/catalogues", ServeDir::new(&state.catalogue_dir))
        .fallback_service(site)
}

fn api_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/catalogues", get(list_catalogues))
        .route("/api/catalogues/{slug}", get(get_catalogue))
        .route("/api/categories", get(list_categories))
        .route("/api/products", get(list_products))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

async fn list_catalogues() -> Json<&'static [Catalogue]> {
    Json(CATALOGUES)
}

async fn get_catalogue(
    Path(slug): Path<String>,
) -> Result<Json<&'static Catalogue>, (StatusCode, Json<ErrorResponse>)> {
    flipbook::find_catalogue(&slug).map(Json).map_err(|e| {
        tracing::debug!("{e}");
        error_response(StatusCode::NOT_FOUND, "Catalogue not found")
    })
}

async fn list_categories() -> Json<&'static [Category]> {
    Json(CATEGORIES)
}

#[derive(Deserialize)]
struct ProductQuery {
    category: Option<String>,
    subcategory: Option<String>,
}

async fn list_products(
    Query(q): Query<ProductQuery>,
) -> Result<Json<Vec<&'static Product>>, (StatusCode, Json<ErrorResponse>)> {
    let products = match (q.category.as_deref(), q.subcategory.as_deref()) {
        (None, None) => PRODUCTS.iter().collect(),
        (Some(cat), None) => content::products_in_category(cat),
        (Some(cat), Some(sub)) => content::products_in(cat, sub),
        (None, Some(_)) => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "subcategory requires category",
            ))
        }
    };
    Ok(Json(products))
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn fixture_state() -> (AppState, PathBuf) {
        let root = std::env::temp_dir().join(format!(
            "smith-site-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let site_dir = root.join("dist");
        let catalogue_dir = root.join("catalogues");
        std::fs::create_dir_all(&site_dir).unwrap();
        std::fs::create_dir_all(&catalogue_dir).unwrap();
        std::fs::write(site_dir.join("index.html"), "<html>smith</html>").unwrap();
        std::fs::write(catalogue_dir.join("dental.pdf"), b"%PDF-1.7\n").unwrap();
        (
            AppState {
                site_dir,
                catalogue_dir,
            },
            root,
        )
    }

    async fn get_body(uri: &str) -> (StatusCode, Vec<u8>) {
        let (state, root) = fixture_state();
        let response = app(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        std::fs::remove_dir_all(root).ok();
        (status, bytes.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = get_body(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_catalogue_lookup() {
        let (status, json) = get_json("/api/catalogues").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), CATALOGUES.len());

        let (status, json) = get_json("/api/catalogues/dental").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["pdf_url"], "/catalogues/dental.pdf");

        let (status, json) = get_json("/api/catalogues/veterinary").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Catalogue not found");
    }

    #[tokio::test]
    async fn test_product_filters() {
        let (_, all) = get_json("/api/products").await;
        assert_eq!(all.as_array().unwrap().len(), PRODUCTS.len());

        let (_, scissors) = get_json("/api/products?category=general-surgery&subcategory=scissors").await;
        assert_eq!(scissors.as_array().unwrap().len(), 3);

        let (_, dental) = get_json("/api/products?category=dental").await;
        assert_eq!(dental.as_array().unwrap().len(), 4);

        let (status, _) = get_json("/api/products?subcategory=scissors").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_static_files() {
        let (status, body) = get_body("/catalogues/dental.pdf").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(b"%PDF"));

        let (status, body) = get_body("/some/deep/link").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>smith</html>");
    }
}
