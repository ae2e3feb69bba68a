use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::geometry::Point;
use crate::viewer::{HostCommand, HostLine, parse_host_line};
use iced::Event;
use iced::Task;
use iced::event;
use iced::futures::Stream;
use iced::futures::stream;
use iced::keyboard;
use iced::mouse;
use iced::window;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::FetchPublicConfig => {
                let backend = self.backend.clone();
                Task::perform(
                    async move {
                        match backend.public_config().await {
                            Ok(config) => config
                                .adobe_client_id
                                .map(|id| id.trim().to_string())
                                .filter(|id| !id.is_empty()),
                            Err(err) => {
                                warn!("Public config unavailable, using local client id: {err}");
                                None
                            }
                        }
                    },
                    Message::PublicConfigLoaded,
                )
            }
            Effect::OpenViewer { document_id } => {
                let url = match self.backend.document_url(&document_id) {
                    Ok(url) => url,
                    Err(err) => {
                        error!(document = %document_id, "Cannot build document URL: {err}");
                        return Task::none();
                    }
                };
                info!(document = %document_id, %url, "Opening document in viewer");
                let command = HostCommand::PreviewFile {
                    client_id: self.client_id.clone(),
                    url: url.to_string(),
                    file_name: document_id,
                };
                if let Err(err) = self.viewer_host.send(&command) {
                    error!("Failed to open document in viewer: {err:#}");
                }
                Task::none()
            }
            Effect::JumpToPage(page) => {
                if let Err(err) = self
                    .viewer_host
                    .send(&HostCommand::GotoLocation { page_number: page })
                {
                    error!(page, "Failed to navigate viewer: {err:#}");
                }
                Task::none()
            }
            Effect::FetchRecommendations { request_id, query } => {
                let backend = self.backend.clone();
                let k = self.config.results_k;
                Task::perform(
                    async move {
                        backend
                            .recommendations(&query, k)
                            .await
                            .map_err(|err| err.to_string())
                    },
                    move |result| Message::RecommendationsLoaded { request_id, result },
                )
            }
            Effect::FetchInsights { request_id, query } => {
                let backend = self.backend.clone();
                let k = self.config.results_k;
                Task::perform(
                    async move {
                        backend
                            .insights(&query, k)
                            .await
                            .map_err(|err| err.to_string())
                    },
                    move |result| Message::InsightsLoaded { request_id, result },
                )
            }
            Effect::GeneratePodcast { request_id, query } => {
                let backend = self.backend.clone();
                let k = self.config.results_k;
                let speakers = self.config.podcast_speakers;
                Task::perform(
                    async move {
                        backend
                            .generate_podcast(&query, k, speakers)
                            .await
                            .map_err(|err| err.to_string())
                    },
                    move |result| Message::PodcastGenerated { request_id, result },
                )
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        // Pointer tracking ignores capture so releases over widgets still count.
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(Point::new(position.x, position.y)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ if status == event::Status::Captured => None,
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed {
                key,
                modifiers,
                at: Instant::now(),
            })
        }
        _ => None,
    }
}

/// Viewer host events read line by line from stdin.
pub(super) fn viewer_host_events() -> impl Stream<Item = Message> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    stream::unfold(lines, |mut lines| async move {
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(message) = host_line_message(&line, Instant::now()) {
                        return Some((message, lines));
                    }
                }
                Ok(None) => {
                    info!("Viewer host closed its event stream");
                    return None;
                }
                Err(err) => {
                    warn!("Viewer host stream failed: {err}");
                    return None;
                }
            }
        }
    })
}

fn host_line_message(line: &str, at: Instant) -> Option<Message> {
    match parse_host_line(line)? {
        HostLine::ApisReady => Some(Message::ViewerApisReady),
        HostLine::Event(event) => Some(Message::ViewerEvent { event, at }),
    }
}
