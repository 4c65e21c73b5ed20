//! Pagination components.
//!
//! The building blocks (`pagination`, `content`, `item`, `link`, `previous`,
//! `next`, `ellipsis`) can be composed by hand; [`pagination_nav`] builds the
//! full bar from a [`PaginationResult`].

use askama::Template;
use plainui_core::{
    classnames,
    pagination::{page_items, PageItem, PaginationResult},
};

use crate::{
    button::{button, ButtonProps, Size, Variant},
    icons::{icon, Icon},
    Attrs, ComponentError, Markup, Result,
};

/// Props shared by the structural elements (`<nav>`, `<ul>`, `<li>`).
#[derive(Debug, Clone, Default)]
pub struct ContainerProps {
    pub id: Option<String>,
    pub class: String,
    pub attrs: Attrs,
}

#[derive(Debug, Clone, Default)]
pub struct LinkProps {
    pub id: Option<String>,
    pub class: String,
    pub attrs: Attrs,
    pub href: Option<String>,
    pub is_active: bool,
    pub disabled: bool,
}

/// Props for the previous and next controls.
#[derive(Debug, Clone, Default)]
pub struct StepProps {
    pub id: Option<String>,
    pub class: String,
    pub attrs: Attrs,
    pub href: Option<String>,
    pub disabled: bool,
    /// Text shown next to the chevron; omitted when empty.
    pub label: String,
}

#[derive(Template)]
#[template(path = "element.html")]
struct ElementTemplate<'a> {
    tag: &'static str,
    id: &'a str,
    class: &'a str,
    attrs: &'a [(String, String)],
    children: &'a Markup,
}

fn element(
    tag: &'static str,
    id: Option<&str>,
    class: &str,
    attrs: &[(String, String)],
    children: &Markup,
) -> Result<Markup> {
    ElementTemplate {
        tag,
        id: id.unwrap_or_default(),
        class,
        attrs,
        children,
    }
    .render()
    .map(Markup::raw)
    .map_err(ComponentError::render(tag))
}

/// `<nav aria-label="Pagination">` wrapper.
pub fn pagination(props: &ContainerProps, children: Markup) -> Result<Markup> {
    let class = classnames::merge(["flex flex-wrap justify-center", props.class.as_str()]);

    let mut attrs = vec![("aria-label".to_string(), "Pagination".to_string())];
    attrs.extend(props.attrs.iter().cloned());

    element("nav", props.id.as_deref(), &class, &attrs, &children)
}

/// `<ul>` holding the pagination items.
pub fn content(props: &ContainerProps, children: Markup) -> Result<Markup> {
    let class = classnames::merge(["flex flex-row items-center gap-1", props.class.as_str()]);
    element("ul", props.id.as_deref(), &class, &props.attrs, &children)
}

pub fn item(props: &ContainerProps, children: Markup) -> Result<Markup> {
    element("li", props.id.as_deref(), &props.class, &props.attrs, &children)
}

/// A numbered page link. Active links use the outline variant.
pub fn link(props: &LinkProps, children: Markup) -> Result<Markup> {
    let mut attrs = props.attrs.clone();
    if props.is_active {
        attrs.push(("aria-current".to_string(), "page".to_string()));
    }

    let mut button_props = ButtonProps {
        id: props.id.clone(),
        class: props.class.clone(),
        attrs,
        size: Size::Icon,
        variant: if props.is_active {
            Variant::Outline
        } else {
            Variant::Ghost
        },
        ..Default::default()
    };

    if props.disabled {
        button_props.disabled = true;
        button_props.variant = Variant::Ghost;
    } else {
        button_props.href = props.href.clone();
    }

    button(&button_props, children)
}

fn step_button(props: &StepProps, children: Markup) -> Result<Markup> {
    let button_props = ButtonProps {
        id: props.id.clone(),
        class: classnames::merge(["gap-1", props.class.as_str()]),
        attrs: props.attrs.clone(),
        variant: Variant::Ghost,
        href: props.href.clone(),
        disabled: props.disabled,
        ..Default::default()
    };

    button(&button_props, children)
}

fn label(text: &str) -> Markup {
    if text.is_empty() {
        Markup::empty()
    } else {
        Markup::raw(format!("<span>{}</span>", Markup::text(text)))
    }
}

pub fn previous(props: &StepProps) -> Result<Markup> {
    let children = Markup::concat([icon(Icon::ChevronLeft, "size-4")?, label(&props.label)]);
    step_button(props, children)
}

pub fn next(props: &StepProps) -> Result<Markup> {
    let children = Markup::concat([label(&props.label), icon(Icon::ChevronRight, "size-4")?]);
    step_button(props, children)
}

pub fn ellipsis() -> Result<Markup> {
    icon(Icon::Ellipsis, "size-4 text-muted-foreground")
}

/// Renders a complete pagination bar: previous, page links with edge
/// pages and ellipses, next.
///
/// `href_for` maps a page number to the link target.
pub fn pagination_nav<F>(result: &PaginationResult, href_for: F) -> Result<Markup>
where
    F: Fn(i64) -> String,
{
    let plain = ContainerProps::default();
    let mut items = Vec::with_capacity(result.pages.len() + 6);

    items.push(item(
        &plain,
        previous(&StepProps {
            href: result.previous_page().map(&href_for),
            disabled: !result.has_previous,
            label: "Previous".to_string(),
            ..Default::default()
        })?,
    )?);

    for slot in page_items(result) {
        let child = match slot {
            PageItem::Page { number, active } => link(
                &LinkProps {
                    href: Some(href_for(number)),
                    is_active: active,
                    ..Default::default()
                },
                Markup::text(&number.to_string()),
            )?,
            PageItem::Ellipsis => ellipsis()?,
        };
        items.push(item(&plain, child)?);
    }

    items.push(item(
        &plain,
        next(&StepProps {
            href: result.next_page().map(&href_for),
            disabled: !result.has_next,
            label: "Next".to_string(),
            ..Default::default()
        })?,
    )?);

    pagination(&plain, content(&plain, Markup::concat(items))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainui_core::pagination::create_pagination;

    fn href(page: i64) -> String {
        format!("?page={page}")
    }

    #[test]
    fn test_pagination_wrapper() {
        let html = pagination(
            &ContainerProps {
                id: Some("pager".to_string()),
                class: "mt-4".to_string(),
                ..Default::default()
            },
            Markup::raw("<ul></ul>"),
        )
        .unwrap();

        assert!(html.as_str().starts_with("<nav"));
        assert!(html.as_str().contains(r#"id="pager""#));
        assert!(html.as_str().contains(r#"class="flex flex-wrap justify-center mt-4""#));
        assert!(html.as_str().contains(r#"aria-label="Pagination""#));
        assert!(html.as_str().ends_with("<ul></ul></nav>"));
    }

    #[test]
    fn test_content_and_item() {
        let li = item(&ContainerProps::default(), Markup::text("x")).unwrap();
        assert_eq!(li.as_str(), "<li>x</li>");

        let ul = content(&ContainerProps::default(), li).unwrap();
        assert_eq!(
            ul.as_str(),
            r#"<ul class="flex flex-row items-center gap-1"><li>x</li></ul>"#
        );
    }

    #[test]
    fn test_active_link() {
        let html = link(
            &LinkProps {
                href: Some("?page=3".to_string()),
                is_active: true,
                ..Default::default()
            },
            Markup::text("3"),
        )
        .unwrap();

        assert!(html.as_str().starts_with(r#"<a href="?page=3""#));
        assert!(html.as_str().contains("border bg-background"));
        assert!(html.as_str().contains(r#"aria-current="page""#));
        assert!(html.as_str().contains("size-9"));
    }

    #[test]
    fn test_disabled_link_drops_href() {
        let html = link(
            &LinkProps {
                href: Some("?page=3".to_string()),
                is_active: true,
                disabled: true,
                ..Default::default()
            },
            Markup::text("3"),
        )
        .unwrap();

        assert!(html.as_str().starts_with("<button"));
        assert!(!html.as_str().contains("href"));
        assert!(!html.as_str().contains("border bg-background"));
    }

    #[test]
    fn test_previous_and_next_order_icon_and_label() {
        let prev = previous(&StepProps {
            href: Some("?page=1".to_string()),
            label: "Back".to_string(),
            ..Default::default()
        })
        .unwrap();
        let prev = prev.as_str();
        assert!(prev.find("<svg").unwrap() < prev.find("<span>Back</span>").unwrap());
        assert!(prev.contains("gap-1"));

        let next = next(&StepProps {
            label: "Forward".to_string(),
            disabled: true,
            ..Default::default()
        })
        .unwrap();
        let next = next.as_str();
        assert!(next.find("<span>Forward</span>").unwrap() < next.find("<svg").unwrap());
        assert!(next.starts_with("<button"));
    }

    #[test]
    fn test_step_without_label() {
        let html = previous(&StepProps::default()).unwrap();
        assert!(!html.as_str().contains("<span>"));
    }

    #[test]
    fn test_pagination_nav_middle_page() {
        let html = pagination_nav(&create_pagination(10, 20, 5), href).unwrap();
        let html = html.as_str();

        for page in [1, 8, 9, 10, 11, 12, 20] {
            assert!(html.contains(&format!(r#"href="?page={page}""#)), "page {page}");
        }
        assert!(!html.contains(r#"href="?page=7""#));
        assert!(!html.contains(r#"href="?page=13""#));
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert_eq!(html.matches("text-muted-foreground").count(), 2);
        assert!(html.contains("<span>Previous</span>"));
        assert!(html.contains("<span>Next</span>"));
    }

    #[test]
    fn test_pagination_nav_first_page_disables_previous() {
        let html = pagination_nav(&create_pagination(1, 3, 5), href).unwrap();
        let html = html.as_str();

        assert!(!html.contains(r#"href="?page=0""#));
        assert_eq!(html.matches(" disabled>").count(), 1);
        assert!(html.contains(r#"href="?page=2""#));
        assert_eq!(html.matches("text-muted-foreground").count(), 0);
    }
}
