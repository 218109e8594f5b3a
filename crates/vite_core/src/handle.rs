//! Script and stylesheet handles and their markup.

use serde::Serialize;

/// A module script registered for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptHandle {
    pub handle: String,
    pub src: String,
    /// Inline module code that must run before this script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_before: Option<String>,
}

impl ScriptHandle {
    pub fn new(handle: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            src: src.into(),
            inline_before: None,
        }
    }

    pub fn with_inline_before(mut self, code: impl Into<String>) -> Self {
        self.inline_before = Some(code.into());
        self
    }

    /// Render the `<script>` tag(s), inline code first.
    pub fn to_html(&self) -> String {
        let id = escape_attr(&self.handle);
        let src = escape_attr(&self.src);
        let tag = format!(r#"<script type="module" src="{src}" id="{id}-js"></script>"#);

        match &self.inline_before {
            Some(code) => format!(
                "<script type=\"module\" id=\"{id}-js-before\">\n{code}\n</script>\n{tag}"
            ),
            None => tag,
        }
    }
}

/// A stylesheet registered for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleHandle {
    pub handle: String,
    pub href: String,
}

impl StyleHandle {
    pub fn new(handle: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            href: href.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<link rel="stylesheet" id="{}-css" href="{}" media="all" />"#,
            escape_attr(&self.handle),
            escape_attr(&self.href)
        )
    }
}

/// Ordered scripts and styles produced by one resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetSet {
    pub scripts: Vec<ScriptHandle>,
    pub styles: Vec<StyleHandle>,
}

impl AssetSet {
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
