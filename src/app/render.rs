use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use crate::price::PriceStatus;
use crate::selection::SaltCard;

use super::state::{DISCLOSURE_LIMIT, Tier, ViewMode};
use super::App;

const HOME_TAGLINE: &str = "Find medicines with amazing discounts";
const HOME_HELP: &str = "Enter search · Esc quit";
const RESULTS_HELP: &str =
    "↑/↓ card · Tab tier · ←/→ option · m more · / edit query · Enter accept · Esc back";

impl App<'_> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_input(frame, layout[0]);
        match self.mode {
            ViewMode::Home => self.render_home(frame, layout[1]),
            ViewMode::Results => self.render_cards(frame, layout[1]),
        }
        self.render_help(frame, layout[2]);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let title = self.input_title.as_deref().unwrap_or("saltscout");
        let prompt = format!("{title} > ");
        let prompt_width = prompt.as_str().width() as u16;

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(prompt_width),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(area);

        frame.render_widget(Paragraph::new(prompt).style(self.theme.prompt), horizontal[0]);
        self.search_input.render_textarea(frame, horizontal[1]);

        if self.fetch_in_flight {
            let throbber = Throbber::default().throbber_style(self.theme.prompt);
            frame.render_stateful_widget(throbber, horizontal[2], &mut self.throbber_state);
        }
    }

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        let mut tagline_area = area;
        if tagline_area.height > 2 {
            tagline_area.y += tagline_area.height / 3;
            tagline_area.height = 1;
        }
        let tagline = Paragraph::new(HOME_TAGLINE)
            .alignment(Alignment::Center)
            .style(self.theme.hint);
        frame.render_widget(tagline, tagline_area);
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect) {
        if self.cards.is_empty() {
            let empty = Paragraph::new("No results")
                .alignment(Alignment::Center)
                .style(self.theme.hint);
            frame.render_widget(empty, area);
            return;
        }

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut heights: Vec<usize> = Vec::with_capacity(self.cards.len());
        for (index, card) in self.cards.iter().enumerate() {
            let card_lines = self.card_lines(index, card);
            heights.push(card_lines.len());
            lines.extend(card_lines);
        }

        self.ensure_card_visible(&heights, area.height as usize);
        let scroll = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(lines).scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = match self.mode {
            ViewMode::Home => HOME_HELP,
            ViewMode::Results => RESULTS_HELP,
        };
        frame.render_widget(Paragraph::new(help).style(self.theme.hint), area);
    }

    /// Scroll so the highlighted card is fully visible.
    fn ensure_card_visible(&mut self, heights: &[usize], viewport: usize) {
        let start: usize = heights[..self.selected.min(heights.len())].iter().sum();
        let height = heights.get(self.selected).copied().unwrap_or(0);
        if start < self.scroll {
            self.scroll = start;
        } else if start + height > self.scroll + viewport {
            self.scroll = (start + height).saturating_sub(viewport);
        }
    }

    fn card_lines(&self, index: usize, card: &SaltCard) -> Vec<Line<'static>> {
        let is_active = index == self.selected;
        let theme = &self.theme;
        let mut lines = Vec::with_capacity(7);

        let marker = if is_active { "▌ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), theme.active_label),
            Span::styled(card.record.salt.clone(), theme.card_title),
        ]));

        lines.push(self.option_row(card, Tier::Form, is_active));
        if card.selection.form().is_some() {
            lines.push(self.option_row(card, Tier::Strength, is_active));
        }
        if card.selection.strength().is_some() {
            lines.push(self.option_row(card, Tier::Packing, is_active));
        }

        let summary = format!(
            "  {} | {} | {}",
            card.selection.form().unwrap_or(""),
            card.selection.strength().unwrap_or(""),
            card.selection.packing().unwrap_or(""),
        );
        lines.push(Line::from(Span::styled(summary, theme.summary)));

        let price_line = match &card.price {
            PriceStatus::Unresolved => Line::raw(""),
            PriceStatus::Resolved(price) => Line::from(Span::styled(
                format!("  From ₹{price}"),
                theme.price,
            )),
            PriceStatus::Message(message) => {
                Line::from(Span::styled(format!("  {message}"), theme.message))
            }
        };
        lines.push(price_line);
        lines.push(Line::raw(""));

        lines
    }

    fn option_row(&self, card: &SaltCard, tier: Tier, card_active: bool) -> Line<'static> {
        let theme = &self.theme;
        let (label, options, selected_value) = match tier {
            Tier::Form => ("Form:", card.form_options(), card.selection.form()),
            Tier::Strength => (
                "Strength:",
                card.strength_options(),
                card.selection.strength(),
            ),
            Tier::Packing => (
                "Packing:",
                card.packing_options(),
                card.selection.packing(),
            ),
        };

        let label_style = if card_active && self.tier == tier {
            theme.active_label
        } else {
            theme.label
        };
        let mut spans = vec![Span::styled(format!("  {label:<10}"), label_style)];

        let expanded = self.disclosure.is_expanded(tier);
        let shown = if expanded {
            options.len()
        } else {
            options.len().min(DISCLOSURE_LIMIT)
        };
        for option in &options[..shown] {
            let is_selected = selected_value == Some(option.as_str());
            let is_available = option_available(card, tier, option);
            spans.push(Span::styled(
                format!(" {option} "),
                theme.option_style(is_selected, is_available),
            ));
            spans.push(Span::raw(" "));
        }

        if options.len() > DISCLOSURE_LIMIT {
            let more = if expanded {
                "hide…".to_string()
            } else {
                format!("+{} more…", options.len() - shown)
            };
            spans.push(Span::styled(more, theme.more));
        }

        Line::from(spans)
    }
}

/// Whether an option at the given tier has data behind it, mirroring the
/// guarded lookups used by the selection transitions.
fn option_available(card: &SaltCard, tier: Tier, option: &str) -> bool {
    match tier {
        Tier::Form => card.record.strengths(option).is_some(),
        Tier::Strength => card
            .selection
            .form()
            .is_some_and(|form| card.record.packings(form, option).is_some()),
        Tier::Packing => matches!(
            (card.selection.form(), card.selection.strength()),
            (Some(form), Some(strength)) if card.record.entries(form, strength, option).is_some()
        ),
    }
}
