use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::selection::SaltCard;
use crate::types::SearchOutcome;

use super::state::{Tier, ViewMode};
use super::App;

impl App<'_> {
    /// Handle one key press. Returns an outcome when the session ends.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(self.outcome(false)));
        }

        match self.mode {
            ViewMode::Home => Ok(self.handle_home_key(key)),
            ViewMode::Results => Ok(self.handle_results_key(key)),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
        match key.code {
            KeyCode::Esc => return Some(self.outcome(false)),
            KeyCode::Enter => self.submit_search(),
            _ => {
                self.search_input.input(key);
            }
        }
        None
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
        match key.code {
            KeyCode::Enter => return Some(self.outcome(true)),
            KeyCode::Esc => self.reset(),
            KeyCode::Char('/') => self.mode = ViewMode::Home,
            KeyCode::Up => self.move_card_up(),
            KeyCode::Down => self.move_card_down(),
            KeyCode::Tab => self.tier = self.tier.next(),
            KeyCode::Left => self.step_option(-1),
            KeyCode::Right => self.step_option(1),
            KeyCode::Char('m') => self.disclosure.toggle(self.tier),
            _ => {}
        }
        None
    }

    fn move_card_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn move_card_down(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    /// Move the active tier's selection by `delta` options, wrapping around,
    /// and apply the transition immediately.
    fn step_option(&mut self, delta: isize) {
        let tier = self.tier;
        let Some(card) = self.selected_card_mut() else {
            return;
        };

        let options = options_for(card, tier);
        if options.is_empty() {
            return;
        }

        let current = match tier {
            Tier::Form => card.selection.form(),
            Tier::Strength => card.selection.strength(),
            Tier::Packing => card.selection.packing(),
        };
        let index = current.and_then(|value| options.iter().position(|option| option == value));
        let next = match index {
            Some(i) => {
                let len = options.len() as isize;
                (i as isize + delta).rem_euclid(len) as usize
            }
            None => 0,
        };

        match tier {
            Tier::Form => card.select_form(&options[next]),
            Tier::Strength => card.select_strength(&options[next]),
            Tier::Packing => card.select_packing(&options[next]),
        }
    }
}

fn options_for(card: &SaltCard, tier: Tier) -> Vec<String> {
    match tier {
        Tier::Form => card.form_options(),
        Tier::Strength => card.strength_options(),
        Tier::Packing => card.packing_options(),
    }
}
