use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9090/api";

/// Columns and heading used by the leave history table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryLayout {
    /// Type, dates and reason; heading shows the employee id.
    #[default]
    Basic,
    /// Adds the employee name to the heading and an applied-date column.
    Extended,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub history_layout: Option<HistoryLayout>,
    #[serde(default)]
    pub cascade_reset: Option<bool>,
}

impl RuntimeConfig {
    /// Fills unset keys from `fallback`.
    fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            history_layout: self.history_layout.or(fallback.history_layout),
            cascade_reset: self.cascade_reset.or(fallback.cascade_reset),
        }
    }
}

/// Resolved UI behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiSettings {
    pub history_layout: HistoryLayout,
    pub cascade_reset: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct ResolvedConfig {
    api_base_url: String,
    ui: UiSettings,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn resolve(cfg: RuntimeConfig) -> ResolvedConfig {
    ResolvedConfig {
        api_base_url: cfg
            .api_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        ui: UiSettings {
            history_layout: cfg.history_layout.unwrap_or_default(),
            cascade_reset: cfg.cascade_reset.unwrap_or(false),
        },
    }
}

fn global_value(obj: &wasm_bindgen::JsValue, keys: &[&str]) -> Option<wasm_bindgen::JsValue> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    // Optional global object: window.__LEAVE_DESK_ENV = { API_BASE_URL: "...", ... }
    let Some(w) = web_sys::window() else {
        return RuntimeConfig::default();
    };
    let Some(env) = js_sys::Reflect::get(&w, &"__LEAVE_DESK_ENV".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
    else {
        return RuntimeConfig::default();
    };
    RuntimeConfig {
        api_base_url: global_value(&env, &["API_BASE_URL", "api_base_url"])
            .and_then(|v| v.as_string()),
        history_layout: global_value(&env, &["HISTORY_LAYOUT", "history_layout"])
            .and_then(|v| v.as_string())
            .and_then(|raw| parse_history_layout(&raw)),
        cascade_reset: global_value(&env, &["CASCADE_RESET", "cascade_reset"])
            .and_then(|v| v.as_bool()),
    }
}

fn parse_history_layout(raw: &str) -> Option<HistoryLayout> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "basic" => Some(HistoryLayout::Basic),
        "extended" => Some(HistoryLayout::Extended),
        other => {
            log::warn!("Ignoring unknown history layout {:?}", other);
            None
        }
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

async fn await_resolved() -> &'static ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached;
    }
    let mut cfg = snapshot_from_globals();
    if cfg.api_base_url.is_none() || cfg.history_layout.is_none() || cfg.cascade_reset.is_none()
    {
        if let Some(file_cfg) = fetch_runtime_config().await {
            cfg = cfg.or(file_cfg);
        }
    }
    let resolved = resolve(cfg);
    log::info!(
        "Runtime config: api={} layout={:?} cascade_reset={}",
        resolved.api_base_url,
        resolved.ui.history_layout,
        resolved.ui.cascade_reset
    );
    RESOLVED.get_or_init(|| resolved)
}

pub async fn await_api_base_url() -> String {
    await_resolved().await.api_base_url.clone()
}

pub async fn await_ui_settings() -> UiSettings {
    await_resolved().await.ui
}

/// Settings known so far; defaults until `await_ui_settings` has resolved.
pub fn ui_settings() -> UiSettings {
    RESOLVED.get().map(|cfg| cfg.ui).unwrap_or_default()
}
