use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};
use std::time::Instant;

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
        at: Instant,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_copy, "ctrl+c", &pressed, modifiers) {
            Some(Message::CopyGesture { at })
        } else if Self::shortcut_matches(&self.config.key_recommend, "ctrl+r", &pressed, modifiers)
        {
            Some(Message::RecommendRequested)
        } else if Self::shortcut_matches(&self.config.key_insights, "ctrl+i", &pressed, modifiers) {
            Some(Message::InsightsRequested)
        } else if Self::shortcut_matches(&self.config.key_podcast, "ctrl+p", &pressed, modifiers) {
            Some(Message::PodcastRequested)
        } else if Self::shortcut_matches(
            &self.config.key_close_panel,
            "escape",
            &pressed,
            modifiers,
        ) {
            Some(Message::ClosePanel)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" | "option" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                "esc" => required_key = Some("escape"),
                key => required_key = Some(key),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::build_test_app;
    use iced::keyboard::Modifiers;

    #[test]
    fn blank_binding_uses_fallback() {
        assert_eq!(App::normalize_shortcut_token("  ", "ctrl+c"), "ctrl+c");
        assert_eq!(App::normalize_shortcut_token(" Ctrl+R ", "x"), "ctrl+r");
    }

    #[test]
    fn matches_ctrl_c_shortcut() {
        assert!(App::shortcut_matches("ctrl+c", "x", "c", Modifiers::CTRL));
        assert!(App::shortcut_matches("cmd+c", "x", "c", Modifiers::LOGO));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+c",
            "x",
            "c",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn esc_is_an_alias_for_escape() {
        assert!(App::shortcut_matches("esc", "x", "escape", Modifiers::empty()));
    }

    #[test]
    fn modifier_only_binding_never_matches() {
        assert!(!App::shortcut_matches("ctrl", "x", "ctrl", Modifiers::CTRL));
    }

    #[test]
    fn keys_map_to_panel_actions() {
        let app = build_test_app();
        let at = Instant::now();
        assert!(matches!(
            app.shortcut_message_for_key(Key::Character("C".into()), Modifiers::CTRL, at),
            Some(Message::CopyGesture { at: stamped }) if stamped == at
        ));
        assert!(matches!(
            app.shortcut_message_for_key(Key::Character("i".into()), Modifiers::CTRL, at),
            Some(Message::InsightsRequested)
        ));
        assert!(matches!(
            app.shortcut_message_for_key(Key::Named(key::Named::Escape), Modifiers::empty(), at),
            Some(Message::ClosePanel)
        ));
        assert!(
            app.shortcut_message_for_key(Key::Character("c".into()), Modifiers::empty(), at)
                .is_none()
        );
    }
}
