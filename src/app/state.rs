use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender};

use throbber_widgets_tui::ThrobberState;

use crate::api::SearchClient;
use crate::fetch::{self, FetchCommand, FetchResult};
use crate::input::SearchInput;
use crate::selection::SaltCard;
use crate::theme::Theme;
use crate::types::{SaltSelection, SearchOutcome};

/// Options per category shown while a category is collapsed.
pub const DISCLOSURE_LIMIT: usize = 2;

/// Which screen the interface is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Query editing; no results shown yet.
    Home,
    /// Browsing the fetched suggestion cards.
    Results,
}

/// The drill-down level targeted by option navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Form,
    Strength,
    Packing,
}

impl Tier {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Tier::Form => Tier::Strength,
            Tier::Strength => Tier::Packing,
            Tier::Packing => Tier::Form,
        }
    }
}

/// Expansion flags per category, view-global, reset only on a full reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub forms: bool,
    pub strengths: bool,
    pub packings: bool,
}

impl Disclosure {
    #[must_use]
    pub fn is_expanded(&self, tier: Tier) -> bool {
        match tier {
            Tier::Form => self.forms,
            Tier::Strength => self.strengths,
            Tier::Packing => self.packings,
        }
    }

    pub fn toggle(&mut self, tier: Tier) {
        match tier {
            Tier::Form => self.forms = !self.forms,
            Tier::Strength => self.strengths = !self.strengths,
            Tier::Packing => self.packings = !self.packings,
        }
    }
}

pub struct App<'a> {
    pub cards: Vec<SaltCard>,
    pub mode: ViewMode,
    pub tier: Tier,
    pub selected: usize,
    pub disclosure: Disclosure,
    pub search_input: SearchInput<'a>,
    pub theme: Theme,
    pub(crate) input_title: Option<String>,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) fetch_in_flight: bool,
    pub(crate) scroll: usize,
    fetch_tx: Sender<FetchCommand>,
    pub(crate) fetch_rx: Receiver<FetchResult>,
    fetch_latest_query_id: Arc<AtomicU64>,
    next_query_id: u64,
    pub(crate) latest_query_id: Option<u64>,
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        let _ = self.fetch_tx.send(FetchCommand::Shutdown);
    }
}

impl<'a> App<'a> {
    pub fn new(client: SearchClient, initial_query: String) -> Self {
        let (fetch_tx, fetch_rx, fetch_latest_query_id) = fetch::spawn(client);
        let mut app = Self {
            cards: Vec::new(),
            mode: ViewMode::Home,
            tier: Tier::Form,
            selected: 0,
            disclosure: Disclosure::default(),
            search_input: SearchInput::new(initial_query),
            theme: Theme::default(),
            input_title: None,
            throbber_state: ThrobberState::default(),
            fetch_in_flight: false,
            scroll: 0,
            fetch_tx,
            fetch_rx,
            fetch_latest_query_id,
            next_query_id: 0,
            latest_query_id: None,
        };
        if !app.search_input.text().trim().is_empty() {
            app.submit_search();
        }
        app
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_input_title(&mut self, title: Option<String>) {
        self.input_title = title;
    }

    /// Submit the current query to the fetch worker. Empty and
    /// whitespace-only terms are suppressed without surfacing an error.
    pub fn submit_search(&mut self) {
        let term = self.search_input.text().trim().to_string();
        if term.is_empty() {
            return;
        }

        self.next_query_id = self.next_query_id.saturating_add(1);
        let id = self.next_query_id;
        self.latest_query_id = Some(id);
        self.fetch_latest_query_id
            .store(id, AtomicOrdering::Release);
        self.fetch_in_flight = true;
        let _ = self.fetch_tx.send(FetchCommand::Query { id, term });
    }

    /// Return to the initial state: empty term, no cards, selection and
    /// disclosure cleared, home screen.
    pub fn reset(&mut self) {
        self.search_input.clear();
        self.cards.clear();
        self.disclosure = Disclosure::default();
        self.tier = Tier::Form;
        self.selected = 0;
        self.scroll = 0;
        self.mode = ViewMode::Home;
        self.latest_query_id = None;
        self.fetch_in_flight = false;
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&SaltCard> {
        self.cards.get(self.selected)
    }

    pub(crate) fn selected_card_mut(&mut self) -> Option<&mut SaltCard> {
        self.cards.get_mut(self.selected)
    }

    /// Snapshot of the highlighted card for the exit outcome.
    #[must_use]
    pub fn current_selection(&self) -> Option<SaltSelection> {
        let card = self.selected_card()?;
        Some(SaltSelection {
            salt: card.record.salt.clone(),
            form: card.selection.form().map(str::to_string),
            strength: card.selection.strength().map(str::to_string),
            packing: card.selection.packing().map(str::to_string),
            price: card.price.clone(),
        })
    }

    pub(crate) fn outcome(&self, accepted: bool) -> SearchOutcome {
        SearchOutcome {
            accepted,
            query: self.search_input.text().to_string(),
            selection: if accepted {
                self.current_selection()
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::{DEFAULT_ENDPOINT, DEFAULT_PHARMACY_IDS};
    use crate::price::PriceStatus;
    use crate::types::SaltRecord;

    pub(crate) fn test_app() -> App<'static> {
        let client =
            SearchClient::new(DEFAULT_ENDPOINT, DEFAULT_PHARMACY_IDS).expect("client builds");
        App::new(client, String::new())
    }

    pub(crate) fn sample_records() -> Vec<SaltRecord> {
        serde_json::from_str(
            r#"[
                {
                    "salt": "Paracetamol",
                    "available_forms": ["tablet", "syrup", "injection"],
                    "salt_forms_json": {
                        "tablet": {
                            "250mg": {
                                "strip of 10 tablets": [
                                    {"selling_price": 45},
                                    {"selling_price": 39}
                                ],
                                "strip of 15 tablets": [{"selling_price": 60}]
                            },
                            "500mg": {
                                "strip of 10 tablets": [{"selling_price": 80}]
                            }
                        },
                        "syrup": {
                            "125mg/5ml": {
                                "bottle of 60 ml": [{"selling_price": 55}]
                            }
                        }
                    }
                },
                {
                    "salt": "Ibuprofen",
                    "available_forms": ["tablet"],
                    "salt_forms_json": {
                        "tablet": {
                            "400mg": {
                                "strip of 10 tablets": [{"selling_price": 22}]
                            }
                        }
                    }
                }
            ]"#,
        )
        .expect("records parse")
    }

    #[test]
    fn empty_query_is_suppressed() {
        let mut app = test_app();
        app.submit_search();
        assert!(!app.fetch_in_flight);
        assert_eq!(app.latest_query_id, None);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut app = test_app();
        app.cards = sample_records()
            .into_iter()
            .map(crate::selection::SaltCard::with_defaults)
            .collect();
        app.mode = ViewMode::Results;
        app.selected = 1;
        app.tier = Tier::Packing;
        app.disclosure.toggle(Tier::Form);

        app.reset();

        assert_eq!(app.search_input.text(), "");
        assert!(app.cards.is_empty());
        assert_eq!(app.mode, ViewMode::Home);
        assert_eq!(app.selected, 0);
        assert_eq!(app.tier, Tier::Form);
        assert_eq!(app.disclosure, Disclosure::default());
    }

    #[test]
    fn current_selection_reflects_the_highlighted_card() {
        let mut app = test_app();
        app.cards = sample_records()
            .into_iter()
            .map(crate::selection::SaltCard::with_defaults)
            .collect();
        app.selected = 1;

        let selection = app.current_selection().expect("selection");
        assert_eq!(selection.salt, "Ibuprofen");
        assert_eq!(selection.form.as_deref(), Some("tablet"));
        assert_eq!(selection.price, PriceStatus::Resolved(22.0));
    }

    #[test]
    fn tier_cycles_through_all_three_levels() {
        assert_eq!(Tier::Form.next(), Tier::Strength);
        assert_eq!(Tier::Strength.next(), Tier::Packing);
        assert_eq!(Tier::Packing.next(), Tier::Form);
    }
}
