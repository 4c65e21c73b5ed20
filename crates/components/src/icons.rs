//! Inline SVG icons (Lucide outlines).

use askama::Template;

use crate::{ComponentError, Markup, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ChevronLeft,
    ChevronRight,
    Ellipsis,
    Layers,
}

impl Icon {
    fn body(self) -> &'static str {
        match self {
            Icon::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Icon::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Icon::Ellipsis => {
                r#"<circle cx="12" cy="12" r="1"/><circle cx="19" cy="12" r="1"/><circle cx="5" cy="12" r="1"/>"#
            }
            Icon::Layers => {
                r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/><path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/><path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#
            }
        }
    }
}

#[derive(Template)]
#[template(path = "icon.html")]
struct IconTemplate<'a> {
    class: &'a str,
    body: &'static str,
}

/// Renders `icon` as an inline `<svg>` carrying `class`.
pub fn icon(icon: Icon, class: &str) -> Result<Markup> {
    IconTemplate {
        class,
        body: icon.body(),
    }
    .render()
    .map(Markup::raw)
    .map_err(ComponentError::render("icon"))
}
