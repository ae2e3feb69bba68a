use super::messages::Message;
use super::state::{
    ACTIONS_BUTTON_HEIGHT, ACTIONS_BUTTON_INSET, ACTIONS_BUTTON_WIDTH, App, HEADER_HEIGHT,
    SIDEBAR_WIDTH, VIEWER_PADDING,
};
use crate::backend::{Recommendation, format_duration};
use crate::geometry::EDGE_MARGIN;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Stack, button, column, container, horizontal_space, mouse_area, opaque, row,
    scrollable, text,
};
use iced::{Color, Element, Length, Padding, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let document_label = self
            .viewer
            .as_ref()
            .map(|viewer| viewer.document_id.clone())
            .unwrap_or_else(|| "No document open".to_string());

        let header = container(
            row![
                text("Connecting the Dots").size(22.0),
                text(document_label),
                horizontal_space(),
                button("Insights").on_press_maybe(
                    (!self.insights.op.loading).then_some(Message::InsightsRequested)
                ),
            ]
            .spacing(16)
            .align_y(Vertical::Center),
        )
        .padding([0.0, VIEWER_PADDING])
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_y(Vertical::Center);

        let body = row![
            container(self.viewer_area())
                .padding(VIEWER_PADDING)
                .width(Length::Fill)
                .height(Length::Fill),
            container(self.sidebar())
                .width(Length::Fixed(SIDEBAR_WIDTH))
                .height(Length::Fill)
                .padding(12)
                .style(container::bordered_box),
        ];

        let mut layers = Stack::new()
            .push(column![header, body])
            .width(Length::Fill)
            .height(Length::Fill);

        if self.insights.visible {
            layers = layers.push(self.insights_modal());
        }

        layers.into()
    }
}

impl App {
    /// Viewer placeholder with the "Actions" button and the floating panel on top.
    fn viewer_area(&self) -> Element<'_, Message> {
        let status = match &self.viewer {
            None => "Pass a document id to open it in the viewer.".to_string(),
            Some(_) if !self.public_config_resolved => {
                "Loading viewer configuration…".to_string()
            }
            Some(_) if !self.bridge.viewer_ready => "Waiting for the viewer…".to_string(),
            Some(viewer) => match viewer.page_number {
                Some(page) => format!("Viewing page {page}"),
                None => "Viewer ready".to_string(),
            },
        };

        let placeholder = container(text(status))
            .center(Length::Fill)
            .style(container::rounded_box);

        let mut layers = Stack::new()
            .push(placeholder)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.viewer.is_some() {
            let actions = button(text("Actions").align_x(Horizontal::Center))
                .width(Length::Fixed(ACTIONS_BUTTON_WIDTH))
                .height(Length::Fixed(ACTIONS_BUTTON_HEIGHT))
                .on_press(Message::ShowActions);
            layers = layers.push(
                container(actions)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Right)
                    .align_y(Vertical::Bottom)
                    .padding(ACTIONS_BUTTON_INSET),
            );
        }

        if self.bridge.panel.visible {
            layers = layers.push(self.floating_panel());
        }

        layers.into()
    }

    fn floating_panel(&self) -> Element<'_, Message> {
        let busy = self.recommendations.loading;
        let panel = container(
            row![
                text(self.context_label()).size(13.0).width(Length::Fill),
                button("Recommend").on_press_maybe((!busy).then_some(Message::RecommendRequested)),
                button("Insights").on_press_maybe(
                    (!self.insights.op.loading).then_some(Message::InsightsRequested)
                ),
                button("✖").on_press(Message::ClosePanel),
            ]
            .spacing(6)
            .align_y(Vertical::Center),
        )
        .width(Length::Fixed(self.config.panel_width))
        .height(Length::Fixed(self.config.panel_height))
        .padding(8)
        .align_y(Vertical::Center)
        .style(container::bordered_box);

        let panel = mouse_area(panel)
            .on_enter(Message::PanelHovered)
            .on_exit(Message::PanelHovered);

        let positioned = match self.bridge.panel.anchor {
            Some(anchor) => container(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(Padding {
                    top: anchor.top,
                    right: 0.0,
                    bottom: 0.0,
                    left: anchor.left,
                }),
            None => container(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(EDGE_MARGIN),
        };

        positioned.into()
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let mut recommendations: Column<'_, Message> = column![
            row![
                text("Related sections").size(18.0),
                horizontal_space(),
                text(if self.recommendations.loading {
                    "Loading…"
                } else {
                    ""
                })
                .size(12.0),
            ]
            .align_y(Vertical::Center)
        ]
        .spacing(8);

        if self.recommendations.items.is_empty() {
            recommendations = recommendations.push(
                text("Select text or turn a page to see related sections.").size(13.0),
            );
        }
        for (idx, item) in self.recommendations.items.iter().enumerate() {
            recommendations = recommendations.push(recommendation_card(idx, item));
        }

        column![
            scrollable(recommendations).height(Length::Fill),
            self.podcast_section(),
        ]
        .spacing(12)
        .into()
    }

    fn podcast_section(&self) -> Element<'_, Message> {
        let op = &self.podcast.op;
        let narrate = button(if op.loading { "Generating…" } else { "Narrate" })
            .on_press_maybe((!op.loading).then_some(Message::PodcastRequested));

        let mut header = row![text("Podcast").size(18.0), horizontal_space(), narrate]
            .spacing(8)
            .align_y(Vertical::Center);
        if self.podcast.is_ready() {
            header = header.push(text("Ready").size(12.0));
        }

        let mut section: Column<'_, Message> = column![header].spacing(6);

        if let Some(error) = &op.error {
            section = section.push(text(error.clone()).size(13.0));
        }

        if let Some(meta) = &op.result {
            let speakers = meta.speakers();
            let speakers_label = if speakers.is_empty() {
                "Two Speakers".to_string()
            } else {
                speakers.join(" & ")
            };
            section = section.push(
                row![
                    text(speakers_label).size(13.0),
                    text(format!("{} parts", meta.parts.len())).size(13.0),
                    text(meta.duration_label()).size(13.0),
                ]
                .spacing(12),
            );
            section = section.push(text(meta.url.clone()).size(12.0));
            for chapter in &meta.chapters {
                section = section.push(
                    text(format!(
                        "{}  {}",
                        format_duration(chapter.start_ms),
                        chapter.speaker.trim()
                    ))
                    .size(12.0),
                );
            }
        }

        container(section)
            .padding(8)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into()
    }

    fn insights_modal(&self) -> Element<'_, Message> {
        let op = &self.insights.op;
        let mut content: Column<'_, Message> = column![
            row![
                text("Insights").size(22.0),
                horizontal_space(),
                button("Close").on_press(Message::CloseInsights),
            ]
            .align_y(Vertical::Center)
        ]
        .spacing(10);

        if op.loading {
            content = content.push(text("Generating insights…"));
        }
        if let Some(error) = &op.error {
            content = content.push(text(format!("Error: {error}")));
        }
        if let Some(insights) = &op.result {
            for (title, items) in insights.sections() {
                content = content.push(text(title).size(17.0));
                for item in items {
                    content = content.push(text(format!("• {item}")).size(14.0));
                }
            }
            if !insights.citations.is_empty() {
                content = content.push(text("Sources").size(17.0));
                for (idx, citation) in insights.citations.iter().enumerate() {
                    content = content.push(
                        button(text(citation.label()).size(12.0))
                            .padding(0)
                            .style(button::text)
                            .on_press(Message::CitationClicked(idx)),
                    );
                }
            }
        }

        let card = container(scrollable(content))
            .width(Length::Fixed(560.0))
            .max_height(520.0)
            .padding(16)
            .style(container::bordered_box);

        // Presses on the card stop at `opaque`; anything else reaches the backdrop.
        let backdrop = mouse_area(
            container(horizontal_space())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.45).into()),
                    ..container::Style::default()
                }),
        )
        .on_press(Message::CloseInsights);

        opaque(
            Stack::new()
                .push(backdrop)
                .push(container(opaque(card)).center(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        )
    }
}

fn recommendation_card(idx: usize, item: &Recommendation) -> Element<'_, Message> {
    let title = item
        .section_title
        .as_deref()
        .filter(|title| !title.trim().is_empty())
        .unwrap_or("Untitled section");
    let location = match (&item.document_id, item.page_number) {
        (Some(document), Some(page)) => format!("{document} • p.{page}"),
        (Some(document), None) => document.clone(),
        (None, Some(page)) => format!("p.{page}"),
        (None, None) => String::new(),
    };

    let mut body: Column<'_, Message> = column![text(title).size(15.0), text(location).size(12.0)]
        .spacing(2);
    if let Some(snippet) = item.snippet.as_deref().filter(|s| !s.trim().is_empty()) {
        body = body.push(text(snippet.trim()).size(13.0));
    }

    button(body)
        .width(Length::Fill)
        .style(button::secondary)
        .on_press(Message::RecommendationClicked(idx))
        .into()
}
