use super::state::App;
use crate::backend::BackendClient;
use crate::config::AppConfig;
use crate::geometry::Rect;
use crate::platform::PlatformSelection;
use anyhow::{Result, anyhow};

/// Scripted platform selection for reducer tests.
#[derive(Debug, Default, Clone)]
pub(crate) struct FakeSelection {
    text: Option<String>,
    rect: Option<Rect>,
}

impl FakeSelection {
    pub(crate) fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            rect: None,
        }
    }

    pub(crate) fn failing() -> Self {
        Self::default()
    }

    pub(crate) fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }
}

impl PlatformSelection for FakeSelection {
    fn selected_text(&self) -> Result<String> {
        self.text.clone().ok_or_else(|| anyhow!("no selection"))
    }

    fn selection_rect(&self) -> Result<Option<Rect>> {
        match self.rect {
            Some(rect) => Ok(Some(rect)),
            None => Err(anyhow!("selection geometry unavailable")),
        }
    }
}

pub(crate) fn build_test_app() -> App {
    build_test_app_with(FakeSelection::default())
}

pub(crate) fn build_test_app_with(selection: FakeSelection) -> App {
    let config = AppConfig::default();
    let backend = BackendClient::new(&config.api_base_url).expect("default backend url");
    let mut app = App::new(config, backend, Box::new(selection));
    app.window_width = 1280.0;
    app.window_height = 800.0;
    app
}
