//! Button component.
//!
//! Renders an `<a>` when an `href` is present and the button is enabled,
//! otherwise a `<button>`.

use askama::Template;
use plainui_core::classnames;

use crate::{Attrs, ComponentError, Markup, Result};

const BASE_CLASSES: [&str; 5] = [
    "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all",
    "disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0",
    "outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]",
    "aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive",
    "cursor-pointer",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl Variant {
    fn classes(self) -> &'static str {
        match self {
            Variant::Default => "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90",
            Variant::Destructive => "bg-destructive text-destructive-foreground shadow-xs hover:bg-destructive/90 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 dark:bg-destructive/60",
            Variant::Outline => "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground dark:bg-input/30 dark:border-input dark:hover:bg-input/50",
            Variant::Secondary => "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80",
            Variant::Ghost => "hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50",
            Variant::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl Size {
    fn classes(self) -> &'static str {
        match self {
            Size::Default => "h-9 px-4 py-2 has-[>svg]:px-3",
            Size::Sm => "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5",
            Size::Lg => "h-10 rounded-md px-6 has-[>svg]:px-4",
            Size::Icon => "size-9",
        }
    }
}

/// The `type` attribute of a rendered `<button>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Reset,
    Submit,
}

impl ButtonType {
    fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Reset => "reset",
            ButtonType::Submit => "submit",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ButtonProps {
    pub id: Option<String>,
    pub class: String,
    pub attrs: Attrs,
    pub variant: Variant,
    pub size: Size,
    pub full_width: bool,
    /// Renders an anchor instead of a button unless `disabled` is set.
    pub href: Option<String>,
    pub target: Option<String>,
    pub disabled: bool,
    pub kind: ButtonType,
    pub form: Option<String>,
}

#[derive(Template)]
#[template(path = "button.html")]
struct ButtonTemplate<'a> {
    id: &'a str,
    class: &'a str,
    href: &'a str,
    target: &'a str,
    kind: &'a str,
    form: &'a str,
    disabled: bool,
    attrs: &'a [(String, String)],
    children: &'a Markup,
}

pub fn button(props: &ButtonProps, children: Markup) -> Result<Markup> {
    let width = if props.full_width { "w-full" } else { "" };
    let class = classnames::merge(
        BASE_CLASSES.iter().copied().chain([
            props.variant.classes(),
            props.size.classes(),
            width,
            props.class.as_str(),
        ]),
    );

    let href = match (&props.href, props.disabled) {
        (Some(href), false) => href.as_str(),
        _ => "",
    };

    ButtonTemplate {
        id: props.id.as_deref().unwrap_or_default(),
        class: &class,
        href,
        target: props.target.as_deref().unwrap_or_default(),
        kind: props.kind.as_str(),
        form: props.form.as_deref().unwrap_or_default(),
        disabled: props.disabled,
        attrs: &props.attrs,
        children: &children,
    }
    .render()
    .map(Markup::raw)
    .map_err(ComponentError::render("button"))
}
