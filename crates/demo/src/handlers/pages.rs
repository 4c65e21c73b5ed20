use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::{
    handlers::AppError,
    pages::{render_document, DemoPage, LinkMode, PageRequest, PAGES},
    state::AppState,
};

/// Query string accepted by every demo page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Numeric `page` parameter. Anything unparseable counts as absent.
    fn page(&self) -> Option<i64> {
        self.page.as_deref().and_then(|p| p.trim().parse().ok())
    }
}

/// Handler for GET / - redirects to the first demo page with 302 Found.
pub async fn root_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, PAGES[0].path)])
}

/// Renders `page` inside the site layout.
pub async fn demo_page(
    page: &'static DemoPage,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let content = page.render(&PageRequest {
        config: &state.config,
        page: query.page(),
    })?;

    let html = render_document(page, content, LinkMode::Server)?;

    Ok(Html(html))
}
