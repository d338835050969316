use axum::{middleware, routing::get, Router};
use contracts::site::routes::SITE_ROUTES;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::site::{self, SiteState};
use crate::shared::config::Config;
use crate::shared::request_logger::request_logger;

/// All routes of the static host.
///
/// Known client routes answer with `index.html` and 200 so the wasm router can
/// render them; unknown paths that are not files get `index.html` with 404.
pub fn configure_routes(config: &Config) -> Router {
    let dist = config.dist_path();
    let index = dist.join("index.html");
    tracing::info!("Serving site from {}", dist.display());

    let state = SiteState {
        base_url: config.base_url().into(),
        lastmod: chrono::Utc::now().format("%Y-%m-%d").to_string().into(),
    };

    let mut router = Router::new()
        .route("/health", get(site::health))
        .route("/sitemap.xml", get(site::sitemap))
        .route("/robots.txt", get(site::robots));

    for route in SITE_ROUTES {
        router = router.route_service(route.path, ServeFile::new(&index));
    }

    router
        .fallback_service(ServeDir::new(&dist).not_found_service(ServeFile::new(&index)))
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>northbridge</body></html>";

    fn test_app(dist: &std::path::Path) -> Router {
        std::fs::write(dist.join("index.html"), INDEX).expect("index");
        std::fs::write(dist.join("app.css"), "body{}").expect("css");
        let config = parse_config(&format!(
            "[server]\nhost = \"127.0.0.1\"\nport = 3000\n[site]\ndist_dir = {:?}\nbase_url = \"https://example.org\"\n",
            dist.display().to_string()
        ))
        .expect("config");
        configure_routes(&config)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (status, body) = get(test_app(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn client_routes_serve_index() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path());
        for path in ["/", "/staff", "/student-life", "/admissions"] {
            let (status, body) = get(app.clone(), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, INDEX, "{path}");
        }
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (status, body) = get(test_app(dir.path()), "/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{}");
    }

    #[tokio::test]
    async fn unknown_paths_get_index_with_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (status, body) = get(test_app(dir.path()), "/no-such-page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn sitemap_and_robots_use_base_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path());

        let (status, sitemap) = get(app.clone(), "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(sitemap.contains("<loc>https://example.org/transport</loc>"));

        let (status, robots) = get(app, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(robots.ends_with("Sitemap: https://example.org/sitemap.xml\n"));
    }
}
