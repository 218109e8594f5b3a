//! Page-level queue of registered assets.

use std::collections::HashSet;

use crate::handle::{AssetSet, ScriptHandle, StyleHandle};

/// Collects asset sets for one page and renders them once.
///
/// Handles are unique: enqueueing the same handle twice keeps the first.
#[derive(Debug, Clone, Default)]
pub struct AssetQueue {
    scripts: Vec<ScriptHandle>,
    styles: Vec<StyleHandle>,
    seen: HashSet<String>,
}

impl AssetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, assets: AssetSet) {
        for style in assets.styles {
            if self.seen.insert(format!("style:{}", style.handle)) {
                self.styles.push(style);
            }
        }
        for script in assets.scripts {
            if self.seen.insert(format!("script:{}", script.handle)) {
                self.scripts.push(script);
            }
        }
    }

    pub fn scripts(&self) -> &[ScriptHandle] {
        &self.scripts
    }

    pub fn styles(&self) -> &[StyleHandle] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }

    /// Stylesheets first, then scripts in registration order.
    pub fn render(&self) -> String {
        self.styles
            .iter()
            .map(StyleHandle::to_html)
            .chain(self.scripts.iter().map(ScriptHandle::to_html))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_assets() -> AssetSet {
        AssetSet {
            scripts: vec![ScriptHandle::new("app", "/build/app.js")],
            styles: vec![StyleHandle::new("app-0", "/build/app.css")],
        }
    }

    #[test]
    fn test_enqueue_deduplicates_handles() {
        let mut queue = AssetQueue::new();
        queue.enqueue(app_assets());
        queue.enqueue(app_assets());

        assert_eq!(queue.scripts().len(), 1);
        assert_eq!(queue.styles().len(), 1);
    }

    #[test]
    fn test_render_styles_before_scripts() {
        let mut queue = AssetQueue::new();
        queue.enqueue(app_assets());

        let html = queue.render();

        assert!(html.find("<link").unwrap() < html.find("<script").unwrap());
    }

    #[test]
    fn test_empty_queue_renders_nothing() {
        let queue = AssetQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.render(), "");
    }
}
