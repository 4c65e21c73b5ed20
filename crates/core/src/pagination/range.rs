use serde::{Deserialize, Serialize};

/// Window size used when the caller asks for fewer than one visible page.
pub const DEFAULT_MAX_VISIBLE: i64 = 5;

/// Normalized pagination state ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    /// Current page, clamped to `[1, total_pages]`.
    pub current_page: i64,
    /// Total number of pages, at least 1.
    pub total_pages: i64,
    /// Visible window of page numbers, ascending and contiguous.
    pub pages: Vec<i64>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationResult {
    /// Page before the current one, if any.
    pub fn previous_page(&self) -> Option<i64> {
        self.has_previous.then(|| self.current_page - 1)
    }

    /// Page after the current one, if any.
    pub fn next_page(&self) -> Option<i64> {
        self.has_next.then(|| self.current_page + 1)
    }

    /// First page number in the visible window.
    pub fn first_visible(&self) -> i64 {
        self.pages.first().copied().unwrap_or(1)
    }

    /// Last page number in the visible window.
    pub fn last_visible(&self) -> i64 {
        self.pages.last().copied().unwrap_or(self.total_pages)
    }
}

/// Builds the pagination state for a list of `total_pages` pages.
///
/// Never fails. Out-of-range inputs are normalized first:
/// - `total_pages < 1` becomes 1
/// - `current_page` is clamped to `[1, total_pages]`
/// - `max_visible < 1` becomes [`DEFAULT_MAX_VISIBLE`]
///
/// The visible window is centered on the current page and shifted to stay
/// inside `[1, total_pages]`. See [`calculate_visible_range`] for its size.
pub fn create_pagination(
    current_page: i64,
    total_pages: i64,
    max_visible: i64,
) -> PaginationResult {
    let (current_page, total_pages, max_visible) =
        normalize(current_page, total_pages, max_visible);

    let (start, end) = calculate_visible_range(current_page, total_pages, max_visible);

    PaginationResult {
        current_page,
        total_pages,
        pages: (start..=end).collect(),
        has_previous: current_page > 1,
        has_next: current_page < total_pages,
    }
}

/// Returns the inclusive `(start, end)` bounds of the visible window.
///
/// Inputs go through the same normalization as [`create_pagination`].
/// When everything fits the window is `[1, total_pages]`. Otherwise it spans
/// `max_visible / 2` pages on each side of the current page, so an even
/// `max_visible` yields `max_visible + 1` pages:
///
/// ```
/// use plainui_core::pagination::calculate_visible_range;
///
/// assert_eq!(calculate_visible_range(6, 20, 5), (4, 8));
/// assert_eq!(calculate_visible_range(5, 10, 4), (3, 7));
/// ```
pub fn calculate_visible_range(
    current_page: i64,
    total_pages: i64,
    max_visible: i64,
) -> (i64, i64) {
    let (current_page, total_pages, max_visible) =
        normalize(current_page, total_pages, max_visible);

    if total_pages <= max_visible {
        return (1, total_pages);
    }

    // Widened so `current + half` cannot overflow near `i64::MAX`.
    let current = i128::from(current_page);
    let total = i128::from(total_pages);
    let half = i128::from(max_visible / 2);

    let mut start = current - half;
    let mut end = current + half;

    if start < 1 {
        end += 1 - start;
        start = 1;
    } else if end > total {
        start -= end - total;
        if start < 1 {
            start = 1;
        }
        end = total;
    }

    // Both bounds lie in `[1, total_pages]`.
    (start as i64, end as i64)
}

fn normalize(current_page: i64, total_pages: i64, max_visible: i64) -> (i64, i64, i64) {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);
    let max_visible = if max_visible < 1 {
        DEFAULT_MAX_VISIBLE
    } else {
        max_visible
    };

    (current_page, total_pages, max_visible)
}
