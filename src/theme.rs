//! Colour themes for the card list.
//!
//! Option chips use a four-way styling matrix: selected or not, crossed with
//! whether the option actually has data behind it.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub prompt: Style,
    pub hint: Style,
    pub card_title: Style,
    pub label: Style,
    pub active_label: Style,
    pub summary: Style,
    pub price: Style,
    pub message: Style,
    pub more: Style,
    pub selected_available: Style,
    pub selected_unavailable: Style,
    pub option_available: Style,
    pub option_unavailable: Style,
}

impl Theme {
    /// Style for one option chip given its selection and availability.
    #[must_use]
    pub fn option_style(&self, is_selected: bool, is_available: bool) -> Style {
        match (is_selected, is_available) {
            (true, true) => self.selected_available,
            (true, false) => self.selected_unavailable,
            (false, true) => self.option_available,
            (false, false) => self.option_unavailable,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

pub const SLATE: Theme = Theme {
    prompt: Style::new().fg(Color::LightCyan),
    hint: Style::new().fg(Color::DarkGray),
    card_title: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    label: Style::new().fg(Color::Rgb(148, 163, 184)),
    active_label: Style::new()
        .fg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    summary: Style::new().fg(Color::Rgb(203, 213, 225)),
    price: Style::new()
        .fg(Color::Rgb(74, 222, 128))
        .add_modifier(Modifier::BOLD),
    message: Style::new().fg(Color::Rgb(248, 113, 113)),
    more: Style::new()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC),
    selected_available: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(250, 204, 21)),
    selected_unavailable: Style::new()
        .fg(Color::Rgb(148, 163, 184))
        .bg(Color::Rgb(51, 65, 85)),
    option_available: Style::new().fg(Color::Rgb(226, 232, 240)),
    option_unavailable: Style::new()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT),
};

pub const LIGHT: Theme = Theme {
    prompt: Style::new().fg(Color::Blue),
    hint: Style::new().fg(Color::Gray),
    card_title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    label: Style::new().fg(Color::DarkGray),
    active_label: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
    summary: Style::new().fg(Color::Black),
    price: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
    message: Style::new().fg(Color::Red),
    more: Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    selected_available: Style::new().fg(Color::White).bg(Color::Blue),
    selected_unavailable: Style::new().fg(Color::DarkGray).bg(Color::Gray),
    option_available: Style::new().fg(Color::Black),
    option_unavailable: Style::new()
        .fg(Color::Gray)
        .add_modifier(Modifier::CROSSED_OUT),
};

/// Theme used when nothing is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}

/// Names accepted by `--theme` and the configuration file.
#[must_use]
pub fn names() -> &'static [&'static str] {
    &["slate", "light"]
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    match name {
        "slate" => Some(SLATE),
        "light" => Some(LIGHT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in names() {
            assert!(by_name(name).is_some(), "theme {name} missing");
        }
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(by_name("neon").is_none());
    }

    #[test]
    fn option_matrix_covers_all_four_states() {
        let theme = default_theme();
        assert_eq!(theme.option_style(true, true), theme.selected_available);
        assert_eq!(theme.option_style(true, false), theme.selected_unavailable);
        assert_eq!(theme.option_style(false, true), theme.option_available);
        assert_eq!(theme.option_style(false, false), theme.option_unavailable);
    }
}
