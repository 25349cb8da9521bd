//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
    #[must_use]
    pub fn new(initial: String) -> Self {
        let mut textarea = TextArea::new(vec![initial]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Current query text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Feed a key into the editor. Returns whether the text changed. Enter
    /// and Tab are reserved for the application and never reach the editor.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Tab => false,
            _ => self.textarea.input(key),
        }
    }

    pub fn clear(&mut self) {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        self.textarea = textarea;
    }

    pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typed_characters_update_the_text() {
        let mut input = SearchInput::new(String::new());
        assert!(input.input(key(KeyCode::Char('p'))));
        assert!(input.input(key(KeyCode::Char('c'))));
        assert!(input.input(key(KeyCode::Char('m'))));
        assert_eq!(input.text(), "pcm");
    }

    #[test]
    fn enter_is_not_consumed_by_the_editor() {
        let mut input = SearchInput::new("pcm".to_string());
        assert!(!input.input(key(KeyCode::Enter)));
        assert_eq!(input.text(), "pcm");
    }

    #[test]
    fn clear_empties_the_query() {
        let mut input = SearchInput::new("pcm".to_string());
        input.clear();
        assert_eq!(input.text(), "");
    }
}
