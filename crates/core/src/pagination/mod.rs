mod items;
mod range;

pub use items::{page_items, PageItem};
pub use range::{
    calculate_visible_range, create_pagination, PaginationResult, DEFAULT_MAX_VISIBLE,
};
