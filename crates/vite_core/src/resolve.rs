//! Pure asset resolution for both modes.

use crate::error::{AssetError, Result};
use crate::handle::{AssetSet, ScriptHandle, StyleHandle};
use crate::manifest::Manifest;
use crate::mode::AssetMode;
use crate::options::{css_handle, AssetOptions};

/// Handle of the dev server client script.
pub const VITE_CLIENT_HANDLE: &str = "vite-client";

const VITE_CLIENT_PATH: &str = "@vite/client";
const REACT_REFRESH_PATH: &str = "@react-refresh";

/// Resolve the scripts and styles for every entry in `options`.
pub fn resolve_assets(options: &AssetOptions, mode: &AssetMode) -> Result<AssetSet> {
    match mode {
        AssetMode::Live { url } => Ok(resolve_live(options, url)),
        AssetMode::Built { manifest, base_url } => resolve_built(options, manifest, base_url),
    }
}

/// URL of `entry` on the dev server at `url`.
pub fn hot_asset(url: &str, entry: &str) -> String {
    format!("{}/{}", url.trim_end_matches('/'), entry.trim())
}

/// Module code wiring the React refresh runtime into the global hook.
///
/// Must run before any other module on the page.
pub fn react_refresh_preamble(url: &str) -> String {
    let runtime = js_string(&hot_asset(url, REACT_REFRESH_PATH));

    format!(
        "import RefreshRuntime from {runtime}\n\
         RefreshRuntime.injectIntoGlobalHook(window)\n\
         window.$RefreshReg$ = () => {{}}\n\
         window.$RefreshSig$ = () => (type) => type\n\
         window.__vite_plugin_react_preamble_installed__ = true"
    )
}

fn resolve_live(options: &AssetOptions, url: &str) -> AssetSet {
    let mut client = ScriptHandle::new(VITE_CLIENT_HANDLE, hot_asset(url, VITE_CLIENT_PATH));
    if options.react_refresh {
        client = client.with_inline_before(react_refresh_preamble(url));
    }

    let mut scripts = vec![client];
    scripts.extend(
        options
            .input
            .entries()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| ScriptHandle::new(options.entry_handle(index), hot_asset(url, entry))),
    );

    AssetSet {
        scripts,
        styles: Vec::new(),
    }
}

fn resolve_built(options: &AssetOptions, manifest: &Manifest, base_url: &str) -> Result<AssetSet> {
    let base_url = base_url.trim_end_matches('/');
    let mut assets = AssetSet::default();

    for (index, entry) in options.input.entries().into_iter().enumerate() {
        let entry = entry.trim();
        let chunk = manifest.get(entry).ok_or_else(|| AssetError::AssetNotFound {
            input: entry.to_string(),
        })?;

        let handle = options.entry_handle(index);

        assets.styles.extend(
            chunk
                .css
                .iter()
                .enumerate()
                .map(|(css_index, css)| {
                    StyleHandle::new(css_handle(&handle, css_index), format!("{base_url}/{css}"))
                }),
        );
        assets
            .scripts
            .push(ScriptHandle::new(handle, format!("{base_url}/{}", chunk.file)));
    }

    Ok(assets)
}

/// Quote `value` as a JS string literal that cannot close a `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| String::from("\"\""))
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestChunk;
    use crate::options::RawAssetOptions;

    fn app_manifest() -> Manifest {
        let mut manifest = Manifest::new();
        manifest.insert(
            "src/app.js",
            ManifestChunk {
                file: "assets/app-abc123.js".to_string(),
                css: vec!["assets/app-abc123.css".to_string()],
            },
        );
        manifest
    }

    fn built(base_url: &str) -> AssetMode {
        AssetMode::Built {
            manifest: app_manifest(),
            base_url: base_url.to_string(),
        }
    }

    fn live(url: &str) -> AssetMode {
        AssetMode::Live {
            url: url.to_string(),
        }
    }

    #[test]
    fn test_live_points_at_dev_server() {
        let options = AssetOptions::new("src/app.js").unwrap();
        let assets = resolve_assets(&options, &live("http://localhost:5173")).unwrap();

        assert_eq!(assets.scripts.len(), 2);
        assert_eq!(assets.scripts[0].handle, "vite-client");
        assert_eq!(assets.scripts[0].src, "http://localhost:5173/@vite/client");
        assert_eq!(assets.scripts[1].handle, "vite-entry");
        assert_eq!(assets.scripts[1].src, "http://localhost:5173/src/app.js");
        assert!(assets.styles.is_empty());
    }

    #[test]
    fn test_live_react_refresh_preamble() {
        let options = AssetOptions::new("src/app.jsx").unwrap();
        let assets = resolve_assets(&options, &live("http://localhost:5173/")).unwrap();

        let preamble = assets.scripts[0].inline_before.as_deref().unwrap();
        assert!(preamble.starts_with(
            "import RefreshRuntime from \"http://localhost:5173/@react-refresh\"\n"
        ));
        assert!(preamble.contains("window.__vite_plugin_react_preamble_installed__ = true"));
        assert!(assets.scripts[1].inline_before.is_none());
    }

    #[test]
    fn test_live_without_react_refresh() {
        let options = AssetOptions::from_raw(RawAssetOptions {
            input: Some("src/app.js".into()),
            react_refresh: Some(false),
            ..RawAssetOptions::default()
        })
        .unwrap();
        let assets = resolve_assets(&options, &live("http://localhost:5173")).unwrap();

        assert!(assets.scripts[0].inline_before.is_none());
    }

    #[test]
    fn test_built_resolves_manifest_entry() {
        let options = AssetOptions::new("src/app.js").unwrap();
        let assets = resolve_assets(&options, &built("https://example.test/build")).unwrap();

        assert_eq!(assets.scripts.len(), 1);
        assert_eq!(
            assets.scripts[0].src,
            "https://example.test/build/assets/app-abc123.js"
        );
        assert_eq!(assets.styles.len(), 1);
        assert_eq!(assets.styles[0].handle, "vite-entry-0");
        assert_eq!(
            assets.styles[0].href,
            "https://example.test/build/assets/app-abc123.css"
        );
    }

    #[test]
    fn test_built_css_order_and_handles() {
        let mut manifest = Manifest::new();
        manifest.insert(
            "src/app.js",
            ManifestChunk {
                file: "assets/app.js".to_string(),
                css: vec!["assets/b.css".to_string(), "assets/a.css".to_string()],
            },
        );
        manifest.insert(
            "src/admin.js",
            ManifestChunk {
                file: "assets/admin.js".to_string(),
                css: vec!["assets/admin.css".to_string()],
            },
        );
        let mode = AssetMode::Built {
            manifest,
            base_url: "/build/".to_string(),
        };
        let options =
            AssetOptions::new(vec!["src/app.js".to_string(), "src/admin.js".to_string()]).unwrap();

        let assets = resolve_assets(&options, &mode).unwrap();

        let styles: Vec<(&str, &str)> = assets
            .styles
            .iter()
            .map(|s| (s.handle.as_str(), s.href.as_str()))
            .collect();
        assert_eq!(
            styles,
            vec![
                ("vite-entry-0", "/build/assets/b.css"),
                ("vite-entry-1", "/build/assets/a.css"),
                ("vite-entry-entry-1-0", "/build/assets/admin.css"),
            ]
        );
        assert_eq!(assets.scripts[1].handle, "vite-entry-entry-1");
    }

    #[test]
    fn test_built_missing_entry() {
        let options = AssetOptions::new("src/missing.js").unwrap();
        let result = resolve_assets(&options, &built("/build"));

        assert_eq!(
            result,
            Err(AssetError::AssetNotFound {
                input: "src/missing.js".to_string()
            })
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let options = AssetOptions::new("src/app.js").unwrap();
        let mode = built("/build");

        assert_eq!(
            resolve_assets(&options, &mode).unwrap(),
            resolve_assets(&options, &mode).unwrap()
        );
    }

    #[test]
    fn test_js_string_cannot_close_script() {
        assert_eq!(js_string("a</script>"), "\"a<\\/script>\"");
    }
}
