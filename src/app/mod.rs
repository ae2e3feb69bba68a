mod messages;
mod state;
#[cfg(test)]
mod testing;
mod update;
mod view;

pub use state::App;

use crate::backend::BackendClient;
use crate::config::AppConfig;
use crate::platform::ClipboardSelection;
use iced::{Size, Theme, window};

/// Launch the reader window, optionally opening `initial_document` right away.
pub fn run_app(
    config: AppConfig,
    backend: BackendClient,
    initial_document: Option<String>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Connecting the Dots", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_: &App| Theme::Light)
        .run_with(move || {
            App::bootstrap(
                config,
                backend,
                Box::new(ClipboardSelection),
                initial_document,
            )
        })
}
