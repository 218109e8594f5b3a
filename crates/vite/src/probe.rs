//! Optional reachability check for the dev server.

use std::time::Duration;

use pressbridge_vite_core::hot_asset;

/// Whether the dev server at `url` answers within `timeout`.
///
/// Any HTTP response counts as alive. Connection errors, timeouts and
/// client construction failures all count as not live.
pub async fn probe_dev_server(url: &str, timeout: Duration) -> bool {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to build probe client");
            return false;
        }
    };

    match client.get(hot_asset(url, "@vite/client")).send().await {
        Ok(response) => {
            tracing::debug!(url, status = %response.status(), "Dev server answered probe");
            true
        }
        Err(e) => {
            tracing::debug!(url, error = %e, "Dev server probe failed");
            false
        }
    }
}
