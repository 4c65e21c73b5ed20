//! Stylesheet and robots.txt served from memory.

use axum::{http::header, response::IntoResponse};

/// Compiled stylesheet for the demo pages.
pub const STYLES_CSS: &str = include_str!("../../assets/styles.css");

pub const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\nCrawl-delay: 0\nDisallow:\n";

/// GET /assets/styles.css
pub async fn styles() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=31536000"),
        ],
        STYLES_CSS,
    )
}

/// GET /robots.txt
pub async fn robots() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        ROBOTS_TXT,
    )
}
