use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    backend: BackendConfig,
    #[serde(default)]
    viewer: ViewerConfig,
    #[serde(default)]
    panel: PanelConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    shortcuts: ShortcutsConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            api_base_url: tables.backend.api_base_url,
            results_k: tables.backend.results_k,
            podcast_speakers: tables.backend.podcast_speakers,
            viewer_client_id: tables.viewer.client_id,
            panel_width: tables.panel.width,
            panel_height: tables.panel.height,
            auto_hide_ms: tables.panel.auto_hide_ms,
            copy_dedupe_ms: tables.panel.copy_dedupe_ms,
            window_width: tables.window.width,
            window_height: tables.window.height,
            key_copy: tables.shortcuts.copy,
            key_recommend: tables.shortcuts.recommend,
            key_insights: tables.shortcuts.insights,
            key_podcast: tables.shortcuts.podcast,
            key_close_panel: tables.shortcuts.close_panel,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct BackendConfig {
    #[serde(default = "defaults::default_api_base_url")]
    api_base_url: String,
    #[serde(default = "defaults::default_results_k")]
    results_k: u32,
    #[serde(default = "defaults::default_podcast_speakers")]
    podcast_speakers: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            api_base_url: defaults::default_api_base_url(),
            results_k: defaults::default_results_k(),
            podcast_speakers: defaults::default_podcast_speakers(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ViewerConfig {
    #[serde(default = "defaults::default_viewer_client_id")]
    client_id: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            client_id: defaults::default_viewer_client_id(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PanelConfig {
    #[serde(default = "defaults::default_panel_width")]
    width: f32,
    #[serde(default = "defaults::default_panel_height")]
    height: f32,
    #[serde(default = "defaults::default_auto_hide_ms")]
    auto_hide_ms: u64,
    #[serde(default = "defaults::default_copy_dedupe_ms")]
    copy_dedupe_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            width: defaults::default_panel_width(),
            height: defaults::default_panel_height(),
            auto_hide_ms: defaults::default_auto_hide_ms(),
            copy_dedupe_ms: defaults::default_copy_dedupe_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ShortcutsConfig {
    #[serde(default = "defaults::default_key_copy")]
    copy: String,
    #[serde(default = "defaults::default_key_recommend")]
    recommend: String,
    #[serde(default = "defaults::default_key_insights")]
    insights: String,
    #[serde(default = "defaults::default_key_podcast")]
    podcast: String,
    #[serde(default = "defaults::default_key_close_panel")]
    close_panel: String,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        ShortcutsConfig {
            copy: defaults::default_key_copy(),
            recommend: defaults::default_key_recommend(),
            insights: defaults::default_key_insights(),
            podcast: defaults::default_key_podcast(),
            close_panel: defaults::default_key_close_panel(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
