use anyhow::Context;
use axum::{extract::Request, routing::get, Router};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod spa;
mod handlers {
    pub mod health_handlers;
}

use config::ServerConfig;
use handlers::health_handlers;

/// API routes first; anything else goes to the static root, with client-side
/// routes rewritten to the entry document.
pub fn build_router(config: &ServerConfig) -> Router {
    let entry_document = config.entry_document.clone();
    let assets = ServeDir::new(&config.static_root)
        .map_request(move |req: Request| spa::rewrite_request(req, &entry_document));

    Router::new()
        .route("/api/health", get(health_handlers::health_check))
        .fallback_service(assets)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    if !config.static_root.is_dir() {
        tracing::warn!(
            "Static root {} does not exist yet, every asset request will 404 until the frontend is built",
            config.static_root.display()
        );
    }

    let app = build_router(&config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(
        "Serving {} on http://{} (entry document {})",
        config.static_root.display(),
        config.bind_addr,
        config.entry_document
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use std::path::PathBuf;

    const INDEX: &str = "<!doctype html><title>Mitchy.</title>";

    struct SiteDir(PathBuf);

    impl SiteDir {
        fn new() -> Self {
            let root = std::env::temp_dir().join(format!("mitchy-site-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(root.join("static")).unwrap();
            std::fs::write(root.join("index.html"), INDEX).unwrap();
            std::fs::write(root.join("static/app.css"), "body{}").unwrap();
            std::fs::write(root.join("favicon.svg"), "<svg/>").unwrap();
            Self(root)
        }

        fn router(&self) -> Router {
            let config = ServerConfig {
                bind_addr: config::DEFAULT_BIND_ADDR.parse().unwrap(),
                static_root: self.0.clone(),
                entry_document: config::DEFAULT_ENTRY_DOCUMENT.parse().unwrap(),
            };
            build_router(&config)
        }
    }

    impl Drop for SiteDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    async fn fetch(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn client_routes_get_the_entry_document() {
        let site = SiteDir::new();
        for path in ["/", "/work", "/project/keelra", "/project/does-not-exist", "/blog/seo-king"] {
            let (status, body) = fetch(site.router(), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, INDEX, "{path}");
        }
    }

    #[tokio::test]
    async fn static_assets_are_served_verbatim() {
        let site = SiteDir::new();
        let (status, body) = fetch(site.router(), "/static/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{}");

        let (status, body) = fetch(site.router(), "/favicon.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<svg/>");
    }

    #[tokio::test]
    async fn missing_asset_is_not_rewritten() {
        let site = SiteDir::new();
        let (status, _) = fetch(site.router(), "/static/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_api_path_is_not_rewritten() {
        let site = SiteDir::new();
        let (status, _) = fetch(site.router(), "/api/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let site = SiteDir::new();
        let (status, body) = fetch(site.router(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
