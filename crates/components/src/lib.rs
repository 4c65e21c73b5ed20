//! Server-side rendered UI components.
//!
//! Each component takes an explicit props struct plus pre-rendered children
//! and returns [`Markup`]. Class names are merged with
//! [`plainui_core::classnames::merge`].
//!
//! # Example
//!
//! ```
//! use plainui_components::{button, Markup};
//! use plainui_components::button::{ButtonProps, Variant};
//!
//! let html = button::button(
//!     &ButtonProps {
//!         variant: Variant::Outline,
//!         href: Some("/docs".to_string()),
//!         ..Default::default()
//!     },
//!     Markup::text("Docs"),
//! )
//! .unwrap();
//!
//! assert!(html.as_str().starts_with("<a href=\"/docs\""));
//! ```

pub mod button;
mod error;
pub mod icons;
mod markup;
pub mod pagination;

pub use error::{ComponentError, Result};
pub use markup::{Attrs, Markup};
