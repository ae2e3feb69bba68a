pub(crate) fn default_api_base_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

pub(crate) fn default_results_k() -> u32 {
    5
}

pub(crate) fn default_podcast_speakers() -> u32 {
    2
}

pub(crate) fn default_viewer_client_id() -> String {
    "YOUR_ADOBE_CLIENT_ID".to_string()
}

pub(crate) fn default_panel_width() -> f32 {
    260.0
}

pub(crate) fn default_panel_height() -> f32 {
    56.0
}

pub(crate) fn default_auto_hide_ms() -> u64 {
    6000
}

pub(crate) fn default_copy_dedupe_ms() -> u64 {
    1200
}

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_key_copy() -> String {
    "ctrl+c".to_string()
}

pub(crate) fn default_key_recommend() -> String {
    "ctrl+r".to_string()
}

pub(crate) fn default_key_insights() -> String {
    "ctrl+i".to_string()
}

pub(crate) fn default_key_podcast() -> String {
    "ctrl+p".to_string()
}

pub(crate) fn default_key_close_panel() -> String {
    "escape".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
