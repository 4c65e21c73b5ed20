use std::fmt;

/// Extra HTML attributes as name/value pairs. Values are escaped on render.
pub type Attrs = Vec<(String, String)>;

/// A rendered, trusted HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Wraps HTML that is already safe to emit.
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes plain text for use as element content.
    pub fn text(text: &str) -> Self {
        Self(html_escape(text))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Concatenates fragments in order.
    pub fn concat<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        Self(fragments.into_iter().map(|m| m.0).collect())
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
