use crate::shared::sitemap::{render_robots, render_sitemap};
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use contracts::site::routes::SITE_ROUTES;
use std::sync::Arc;

/// Values the site handlers need from the configuration.
#[derive(Clone)]
pub struct SiteState {
    pub base_url: Arc<str>,
    /// ISO date reported as `<lastmod>`; the content ships with the binary.
    pub lastmod: Arc<str>,
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn sitemap(State(state): State<SiteState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&state.base_url, SITE_ROUTES, &state.lastmod),
    )
}

pub async fn robots(State(state): State<SiteState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.base_url),
    )
}
