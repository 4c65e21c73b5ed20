//! Pure logic for Plain UI - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - The pagination range calculator and page-item layout
//! - Class-name merging for component styles
//!
//! # Example
//!
//! ```
//! use plainui_core::pagination::create_pagination;
//!
//! let data = create_pagination(6, 20, 5);
//! assert_eq!(data.pages, vec![4, 5, 6, 7, 8]);
//! assert!(data.has_previous && data.has_next);
//! ```

pub mod classnames;
pub mod pagination;
