use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        api,
        assets::{robots, styles},
        health::livez,
        pages::{demo_page, root_redirect, PageQuery},
    },
    pages::PAGES,
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new().route("/", get(root_redirect));

    for page in PAGES {
        router = router.route(
            page.path,
            get(move |state: State<AppState>, query: Query<PageQuery>| {
                demo_page(page, state, query)
            }),
        );
    }

    router
        .route("/api/pagination", get(api::pagination))
        .route("/assets/styles.css", get(styles))
        .route("/robots.txt", get(robots))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;

    async fn get_response(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = get_response(create_app(AppState::default()), uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_root_redirects_to_first_page() {
        let (status, headers, _) = get_response(create_app(AppState::default()), "/").await;

        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(headers[header::LOCATION], PAGES[0].path);
    }

    #[tokio::test]
    async fn test_pagination_page() {
        let (status, headers, html) =
            get_response(create_app(AppState::default()), "/pagination").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(r#"aria-label="Pagination""#));
        assert!(html.contains("Page 6 of 20"));
    }

    #[tokio::test]
    async fn test_pagination_page_honours_query() {
        let (_, _, html) =
            get_response(create_app(AppState::default()), "/pagination?page=20").await;
        assert!(html.contains("Page 20 of 20"));

        let (status, _, html) =
            get_response(create_app(AppState::default()), "/pagination?page=oops").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Page 6 of 20"));
    }

    #[tokio::test]
    async fn test_pagination_page_uses_config() {
        let state = AppState::new(Config {
            total_pages: 3,
            initial_page: 2,
            ..Config::default()
        });

        let (_, _, html) = get_response(create_app(state), "/pagination").await;

        assert!(html.contains("Page 2 of 3"));
    }

    #[tokio::test]
    async fn test_buttons_page() {
        let (status, _, html) = get_response(create_app(AppState::default()), "/buttons").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>Buttons - Plain UI</title>"));
        assert!(html.contains(">Destructive</button>"));
    }

    #[tokio::test]
    async fn test_api_pagination() {
        let (status, json) = get_json("/api/pagination?page=6&total=20&max_visible=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["currentPage"], 6);
        assert_eq!(json["totalPages"], 20);
        assert_eq!(json["pages"], serde_json::json!([4, 5, 6, 7, 8]));
        assert_eq!(json["hasPrevious"], true);
        assert_eq!(json["hasNext"], true);
    }

    #[tokio::test]
    async fn test_api_pagination_normalizes_missing_params() {
        let (status, json) = get_json("/api/pagination").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["pages"], serde_json::json!([1]));
        assert_eq!(json["hasPrevious"], false);
        assert_eq!(json["hasNext"], false);
    }

    #[tokio::test]
    async fn test_api_pagination_clamps_current_page() {
        let (_, json) = get_json("/api/pagination?page=100&total=10&max_visible=5").await;

        assert_eq!(json["currentPage"], 10);
        assert_eq!(json["pages"], serde_json::json!([6, 7, 8, 9, 10]));
        assert_eq!(json["hasNext"], false);
    }

    #[tokio::test]
    async fn test_api_pagination_rejects_oversized_window() {
        let (status, json) = get_json("/api/pagination?page=1&total=1000&max_visible=101").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "max_visible must be at most 100 (got 101)");
    }

    #[tokio::test]
    async fn test_styles_and_robots() {
        let (status, headers, css) =
            get_response(create_app(AppState::default()), "/assets/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/css; charset=utf-8");
        assert!(css.contains(".flex"));

        let (status, headers, robots) =
            get_response(create_app(AppState::default()), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=86400");
        assert!(robots.starts_with("User-agent: *"));
    }

    #[tokio::test]
    async fn test_livez() {
        let (status, _, _) = get_response(create_app(AppState::default()), "/livez").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, _) = get_response(create_app(AppState::default()), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
