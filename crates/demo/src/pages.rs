//! Demo page registry and document rendering.

use anyhow::Result;
use askama::Template;
use plainui_components::{
    button::{button, ButtonProps, Size, Variant},
    icons::{icon, Icon},
    pagination::pagination_nav,
    Markup,
};
use plainui_core::pagination::create_pagination;

use crate::config::Config;

/// How sidebar and asset links are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Absolute paths served by the demo server.
    Server,
    /// Relative paths for the generated static site (`<page>/index.html`).
    Static,
}

/// Inputs available to a page renderer.
pub struct PageRequest<'a> {
    pub config: &'a Config,
    /// Page number taken from `?page=`, if present and numeric.
    pub page: Option<i64>,
}

/// A demo page served at `path` and listed in the sidebar.
pub struct DemoPage {
    pub path: &'static str,
    pub label: &'static str,
    render: fn(&PageRequest<'_>) -> Result<Markup>,
}

impl DemoPage {
    pub fn render(&self, request: &PageRequest<'_>) -> Result<Markup> {
        (self.render)(request)
    }

    /// Directory name of the page inside a generated static site.
    pub fn slug(&self) -> &'static str {
        match self.path.trim_start_matches('/') {
            "" => "index",
            slug => slug,
        }
    }
}

pub static PAGES: &[DemoPage] = &[
    DemoPage {
        path: "/buttons",
        label: "Buttons",
        render: render_buttons,
    },
    DemoPage {
        path: "/pagination",
        label: "Pagination",
        render: render_pagination,
    },
];

struct SidebarLink {
    href: String,
    class: String,
    label: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate {
    title: String,
    css_path: &'static str,
    logo: Markup,
    links: Vec<SidebarLink>,
    content: Markup,
}

#[derive(Template)]
#[template(path = "redirect.html")]
struct RedirectTemplate<'a> {
    target: &'a str,
}

/// Wraps page content in the full HTML document with the sidebar.
pub fn render_document(page: &DemoPage, content: Markup, mode: LinkMode) -> Result<String> {
    let links = PAGES
        .iter()
        .map(|p| {
            let active = p.path == page.path;
            let mut class =
                String::from("block rounded-md px-3 py-2 text-sm font-medium transition-colors");
            if active {
                class.push_str(" bg-sidebar-accent text-sidebar-accent-foreground");
            } else {
                class.push_str(
                    " text-sidebar-foreground/70 hover:bg-sidebar-accent hover:text-sidebar-accent-foreground",
                );
            }

            let href = match mode {
                LinkMode::Server => p.path.to_string(),
                LinkMode::Static => format!("../{}/", p.slug()),
            };

            SidebarLink {
                href,
                class,
                label: p.label,
                active,
            }
        })
        .collect();

    let css_path = match mode {
        LinkMode::Server => "/assets/styles.css",
        LinkMode::Static => "../assets/styles.css",
    };

    let html = LayoutTemplate {
        title: format!("{} - Plain UI", page.label),
        css_path,
        logo: icon(Icon::Layers, "size-6 text-primary")?,
        links,
        content,
    }
    .render()?;

    Ok(html)
}

/// Meta-refresh page pointing at `target`, used as the static site index.
pub fn render_redirect(target: &str) -> Result<String> {
    Ok(RedirectTemplate { target }.render()?)
}

fn page_href(page: i64) -> String {
    format!("?page={page}")
}

#[derive(Template)]
#[template(path = "pagination.html")]
struct PaginationTemplate {
    nav: Markup,
    compact: Markup,
    current_page: i64,
    total_pages: i64,
}

fn render_pagination(request: &PageRequest<'_>) -> Result<Markup> {
    let config = request.config;
    let requested = request.page.unwrap_or(config.initial_page);
    let data = create_pagination(requested, config.total_pages, config.max_visible);
    let compact = create_pagination(data.current_page, data.total_pages, 3);

    tracing::debug!(
        requested,
        current_page = data.current_page,
        total_pages = data.total_pages,
        "Rendering pagination demo"
    );

    let html = PaginationTemplate {
        nav: pagination_nav(&data, page_href)?,
        compact: pagination_nav(&compact, page_href)?,
        current_page: data.current_page,
        total_pages: data.total_pages,
    }
    .render()?;

    Ok(Markup::raw(html))
}

#[derive(Template)]
#[template(path = "buttons.html")]
struct ButtonsTemplate {
    variants: Vec<Markup>,
    sizes: Vec<Markup>,
    states: Vec<Markup>,
}

fn render_buttons(_request: &PageRequest<'_>) -> Result<Markup> {
    let variants = [
        (Variant::Default, "Default"),
        (Variant::Secondary, "Secondary"),
        (Variant::Destructive, "Destructive"),
        (Variant::Outline, "Outline"),
        (Variant::Ghost, "Ghost"),
        (Variant::Link, "Link"),
    ]
    .into_iter()
    .map(|(variant, label)| {
        button(
            &ButtonProps {
                variant,
                ..Default::default()
            },
            Markup::text(label),
        )
    })
    .collect::<plainui_components::Result<Vec<_>>>()?;

    let mut sizes = [(Size::Sm, "Small"), (Size::Default, "Default"), (Size::Lg, "Large")]
        .into_iter()
        .map(|(size, label)| {
            button(
                &ButtonProps {
                    size,
                    ..Default::default()
                },
                Markup::text(label),
            )
        })
        .collect::<plainui_components::Result<Vec<_>>>()?;
    sizes.push(button(
        &ButtonProps {
            size: Size::Icon,
            variant: Variant::Outline,
            attrs: vec![("aria-label".to_string(), "Next".to_string())],
            ..Default::default()
        },
        icon(Icon::ChevronRight, "size-4")?,
    )?);

    let states = vec![
        button(
            &ButtonProps {
                href: Some("/pagination".to_string()),
                variant: Variant::Outline,
                ..Default::default()
            },
            Markup::text("As link"),
        )?,
        button(
            &ButtonProps {
                disabled: true,
                ..Default::default()
            },
            Markup::text("Disabled"),
        )?,
        button(
            &ButtonProps {
                full_width: true,
                variant: Variant::Secondary,
                ..Default::default()
            },
            Markup::text("Full width"),
        )?,
    ];

    let html = ButtonsTemplate {
        variants,
        sizes,
        states,
    }
    .render()?;

    Ok(Markup::raw(html))
}
