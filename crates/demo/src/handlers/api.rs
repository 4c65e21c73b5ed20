//! JSON API exposing the pagination calculator.

use axum::{
    extract::{Query, State},
    Json,
};
use plainui_core::pagination::{create_pagination, PaginationResult};
use serde::Deserialize;

use crate::{handlers::ApiError, state::AppState};

/// Query for GET /api/pagination. Values are kept as strings so that
/// malformed numbers fall through to the calculator's normalization.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    page: Option<String>,
    total: Option<String>,
    max_visible: Option<String>,
}

fn number_or_zero(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// GET /api/pagination?page=&total=&max_visible=
///
/// Missing or non-numeric parameters are treated as `0`, which the
/// calculator normalizes (page 1, one page, default window).
pub async fn pagination(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PaginationResult>, ApiError> {
    let page = number_or_zero(query.page.as_deref());
    let total = number_or_zero(query.total.as_deref());
    let max_visible = number_or_zero(query.max_visible.as_deref());

    let limit = state.config.api_max_visible_limit;
    if max_visible > limit {
        return Err(ApiError::MaxVisibleTooLarge {
            requested: max_visible,
            limit,
        });
    }

    let result = create_pagination(page, total, max_visible);

    tracing::debug!(
        page,
        total,
        max_visible,
        pages = result.pages.len(),
        "Computed pagination"
    );

    Ok(Json(result))
}
