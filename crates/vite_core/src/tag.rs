//! Rewriting script tags produced by a host templating layer.
//!
//! Tags built by this crate already carry `type="module"`. This routine is
//! only for markup the host renders itself, where we can only intercede
//! on the finished string.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

const MODULE_TYPE: &str = r#"type="module""#;

static TYPE_ATTRIBUTE: OnceLock<Regex> = OnceLock::new();
static SCRIPT_OPEN: OnceLock<Regex> = OnceLock::new();

fn type_attribute() -> &'static Regex {
    TYPE_ATTRIBUTE.get_or_init(|| {
        Regex::new(r#"(\s)type\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("type attribute pattern is valid")
    })
}

fn script_open() -> &'static Regex {
    SCRIPT_OPEN.get_or_init(|| Regex::new(r"<script\b[^>]*>").expect("script pattern is valid"))
}

/// Make the tag of `target_handle` a module script.
///
/// Tags of any other handle are returned untouched. Only opening `<script>`
/// tokens are rewritten, each on its own: an existing `type="..."` (or
/// `type='...'`) attribute is replaced in place, otherwise `type="module"`
/// is inserted right after `<script`. Script bodies are never touched.
pub fn set_script_type_attribute<'a>(tag: &'a str, target_handle: &str, handle: &str) -> Cow<'a, str> {
    if target_handle != handle {
        return Cow::Borrowed(tag);
    }

    script_open().replace_all(tag, |caps: &Captures<'_>| {
        let open = &caps[0];
        if type_attribute().is_match(open) {
            type_attribute()
                .replace(open, format!("${{1}}{MODULE_TYPE}"))
                .into_owned()
        } else {
            format!("<script {MODULE_TYPE}{}", &open["<script".len()..])
        }
    })
}
