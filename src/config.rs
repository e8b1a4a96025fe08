//! Frontend Configuration
//!
//! Reads `BoardConfig` JSON from `<meta name="board-config" content='{...}'>`.
//! Without the tag, defaults apply with optional compile-time overrides
//! (`BOARD_API_BASE`, `BOARD_PROJECT_ID`).

use board_core::domain::ProjectId;
use board_core::BoardConfig;

const META_NAME: &str = "board-config";

pub fn load_config() -> BoardConfig {
    let mut config = match read_meta() {
        Some(json) => BoardConfig::from_json(&json).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
            compiled_defaults()
        }),
        None => compiled_defaults(),
    };

    // reqwest needs absolute URLs
    if let Some(origin) = page_origin() {
        config.api_base_url = absolutize(&config.api_base_url, &origin);
    }
    config
}

fn read_meta() -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", META_NAME);
    let element = doc.query_selector(&selector).ok()??;
    element.get_attribute("content")
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn compiled_defaults() -> BoardConfig {
    let mut config = BoardConfig::default();
    if let Some(base) = option_env!("BOARD_API_BASE") {
        config.api_base_url = base.trim_end_matches('/').to_string();
    }
    if let Some(project_id) = option_env!("BOARD_PROJECT_ID") {
        config.project_id = ProjectId::new(project_id);
    }
    config
}

/// Resolve a root-relative base URL against the page origin
pub(crate) fn absolutize(base: &str, origin: &str) -> String {
    if base.starts_with("http://") || base.starts_with("https://") {
        return base.to_string();
    }
    format!("{}/{}", origin.trim_end_matches('/'), base.trim_start_matches('/'))
}
