//! Browser interop: page host, randomness, new tabs

use tracing::warn;

const FALLBACK_HOST: &str = "localhost";

/// Hostname serving this page, used as the Twitch embed `parent`
pub fn page_host() -> String {
    web_sys_x::window()
        .and_then(|w| w.location().hostname().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| FALLBACK_HOST.to_string())
}

/// Uniform roll in `[0, 1)`
pub fn random_roll() -> f64 {
    js_sys_x::Math::random()
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys_x::window() else {
        warn!("No window to open {url} in");
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open {url}: {e:?}");
    }
}
