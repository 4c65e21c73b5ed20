use serde::{Deserialize, Serialize};

use super::range::PaginationResult;

/// One numbered slot in a rendered page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageItem {
    Page { number: i64, active: bool },
    Ellipsis,
}

impl PageItem {
    fn page(number: i64, current_page: i64) -> Self {
        PageItem::Page {
            number,
            active: number == current_page,
        }
    }
}

/// Lays out the numbered slots for a pagination bar.
///
/// The visible window is always included. When it does not reach the
/// first or last page, that page is pinned at the edge, with an ellipsis
/// standing in for any pages skipped between it and the window.
pub fn page_items(result: &PaginationResult) -> Vec<PageItem> {
    let current = result.current_page;
    let first = result.first_visible();
    let last = result.last_visible();

    let mut items = Vec::with_capacity(result.pages.len() + 4);

    if first > 1 {
        items.push(PageItem::page(1, current));
        if first > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend(result.pages.iter().map(|&n| PageItem::page(n, current)));

    if last < result.total_pages {
        if last < result.total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::page(result.total_pages, current));
    }

    items
}
