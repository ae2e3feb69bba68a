use serde::Deserialize;

/// Flattened app configuration; the on-disk layout lives in `tables`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub results_k: u32,
    pub podcast_speakers: u32,
    pub viewer_client_id: String,
    pub panel_width: f32,
    pub panel_height: f32,
    pub auto_hide_ms: u64,
    pub copy_dedupe_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub key_copy: String,
    pub key_recommend: String,
    pub key_insights: String,
    pub key_podcast: String,
    pub key_close_panel: String,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: crate::config::defaults::default_api_base_url(),
            results_k: crate::config::defaults::default_results_k(),
            podcast_speakers: crate::config::defaults::default_podcast_speakers(),
            viewer_client_id: crate::config::defaults::default_viewer_client_id(),
            panel_width: crate::config::defaults::default_panel_width(),
            panel_height: crate::config::defaults::default_panel_height(),
            auto_hide_ms: crate::config::defaults::default_auto_hide_ms(),
            copy_dedupe_ms: crate::config::defaults::default_copy_dedupe_ms(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            key_copy: crate::config::defaults::default_key_copy(),
            key_recommend: crate::config::defaults::default_key_recommend(),
            key_insights: crate::config::defaults::default_key_insights(),
            key_podcast: crate::config::defaults::default_key_podcast(),
            key_close_panel: crate::config::defaults::default_key_close_panel(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Normalize values that would otherwise break geometry or requests.
    pub fn clamped(mut self) -> Self {
        fn normalize_key_binding(value: &mut String, fallback: String) {
            let normalized = value.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                *value = fallback;
            } else {
                *value = normalized;
            }
        }

        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if self.api_base_url.is_empty() {
            self.api_base_url = crate::config::defaults::default_api_base_url();
        }
        self.results_k = self.results_k.clamp(1, 50);
        self.podcast_speakers = self.podcast_speakers.clamp(1, 4);
        if !self.panel_width.is_finite() || self.panel_width <= 0.0 {
            self.panel_width = crate::config::defaults::default_panel_width();
        }
        if !self.panel_height.is_finite() || self.panel_height <= 0.0 {
            self.panel_height = crate::config::defaults::default_panel_height();
        }
        self.auto_hide_ms = self.auto_hide_ms.max(500);
        self.window_width = self.window_width.clamp(320.0, 7680.0);
        self.window_height = self.window_height.clamp(240.0, 4320.0);
        normalize_key_binding(
            &mut self.key_copy,
            crate::config::defaults::default_key_copy(),
        );
        normalize_key_binding(
            &mut self.key_recommend,
            crate::config::defaults::default_key_recommend(),
        );
        normalize_key_binding(
            &mut self.key_insights,
            crate::config::defaults::default_key_insights(),
        );
        normalize_key_binding(
            &mut self.key_podcast,
            crate::config::defaults::default_key_podcast(),
        );
        normalize_key_binding(
            &mut self.key_close_panel,
            crate::config::defaults::default_key_close_panel(),
        );
        self
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
