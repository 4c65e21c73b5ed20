use thiserror::Error;

/// Errors raised while rendering a component.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("Failed to render {component}: {source}")]
    Render {
        component: &'static str,
        #[source]
        source: askama::Error,
    },
}

impl ComponentError {
    pub(crate) fn render(component: &'static str) -> impl FnOnce(askama::Error) -> Self {
        move |source| ComponentError::Render { component, source }
    }
}

pub type Result<T> = std::result::Result<T, ComponentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        let err = ComponentError::render("button")(askama::Error::Fmt);
        assert!(err.to_string().starts_with("Failed to render button:"));
    }
}
