//! Page root markup for full page loads.

use super::error::Result;
use super::page::PagePayload;

/// Default id of the element the client runtime mounts on.
pub const DEFAULT_ROOT_ID: &str = "app";

/// Escape `& < > " '` for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render `<div id=".." data-page=".."></div>` for the client runtime to boot from.
///
/// The class attribute is omitted when `classes` is empty.
pub fn page_root(payload: &PagePayload, id: &str, classes: &str) -> Result<String> {
    let page = escape_html(&payload.to_json()?);
    let id = escape_html(id);

    if classes.is_empty() {
        Ok(format!(r#"<div id="{id}" data-page="{page}"></div>"#))
    } else {
        let classes = escape_html(classes);
        Ok(format!(
            r#"<div id="{id}" class="{classes}" data-page="{page}"></div>"#
        ))
    }
}
