//! Per-record view models and the drill-down state machine.

use crate::price::{PriceMessage, PriceStatus, resolve_lowest_price};
use crate::types::SaltRecord;

/// Drill-down progress for one record. The tagged layout makes an
/// out-of-order transition (packing before strength) unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    None,
    Form {
        form: String,
    },
    Strength {
        form: String,
        strength: String,
    },
    Full {
        form: String,
        strength: String,
        packing: String,
    },
}

impl Selection {
    #[must_use]
    pub fn form(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Form { form }
            | Selection::Strength { form, .. }
            | Selection::Full { form, .. } => Some(form),
        }
    }

    #[must_use]
    pub fn strength(&self) -> Option<&str> {
        match self {
            Selection::Strength { strength, .. } | Selection::Full { strength, .. } => {
                Some(strength)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn packing(&self) -> Option<&str> {
        match self {
            Selection::Full { packing, .. } => Some(packing),
            _ => None,
        }
    }
}

/// One suggestion card: the immutable record plus its own selection and
/// price state. Cards are created wholesale on a successful search and
/// discarded wholesale on reset.
#[derive(Debug, Clone)]
pub struct SaltCard {
    pub record: SaltRecord,
    pub selection: Selection,
    pub price: PriceStatus,
}

impl SaltCard {
    /// Build a card with the default drill-down: first available form, first
    /// strength key, first packing key, and the price of the first vendor
    /// entry there. The minimum is only computed on an explicit packing
    /// selection.
    #[must_use]
    pub fn with_defaults(record: SaltRecord) -> Self {
        let mut card = Self {
            record,
            selection: Selection::None,
            price: PriceStatus::Unresolved,
        };

        let Some(form) = card.record.available_forms.first().cloned() else {
            return card;
        };
        card.select_form(&form);

        let Some(strength) = card
            .record
            .strengths(&form)
            .and_then(|strengths| strengths.keys().next().cloned())
        else {
            return card;
        };
        card.select_strength(&strength);

        let Some(packing) = card
            .record
            .packings(&form, &strength)
            .and_then(|packings| packings.keys().next().cloned())
        else {
            return card;
        };
        let first_price = card
            .record
            .entries(&form, &strength, &packing)
            .and_then(|entries| entries.first())
            .and_then(|entry| entry.selling_price);

        card.selection = Selection::Full {
            form,
            strength,
            packing,
        };
        card.price = match first_price {
            Some(price) => PriceStatus::Resolved(price),
            None => PriceStatus::Unresolved,
        };
        card
    }

    /// Select a form, clearing strength, packing, and any computed price. A
    /// form with no data keeps the selection but surfaces the unavailability
    /// message immediately.
    pub fn select_form(&mut self, form: &str) {
        self.price = if self.record.strengths(form).is_none() {
            PriceStatus::Message(PriceMessage::MedicineUnavailable)
        } else {
            PriceStatus::Unresolved
        };
        self.selection = Selection::Form {
            form: form.to_string(),
        };
    }

    /// Select a strength under the current form, clearing packing and price.
    /// Ignored when no form is selected yet.
    pub fn select_strength(&mut self, strength: &str) {
        let Some(form) = self.selection.form().map(str::to_string) else {
            return;
        };
        self.price = if self.record.packings(&form, strength).is_none() {
            PriceStatus::Message(PriceMessage::MedicineUnavailable)
        } else {
            PriceStatus::Unresolved
        };
        self.selection = Selection::Strength {
            form,
            strength: strength.to_string(),
        };
    }

    /// Select a packing and resolve the price. This is the only transition
    /// that reaches a fully specified selection. Ignored until both form and
    /// strength are selected.
    pub fn select_packing(&mut self, packing: &str) {
        let (Some(form), Some(strength)) = (
            self.selection.form().map(str::to_string),
            self.selection.strength().map(str::to_string),
        ) else {
            return;
        };
        self.price = resolve_lowest_price(&self.record, &form, Some(&strength), Some(packing));
        self.selection = Selection::Full {
            form,
            strength,
            packing: packing.to_string(),
        };
    }

    /// Form labels offered by the record, in backend order.
    #[must_use]
    pub fn form_options(&self) -> Vec<String> {
        self.record.available_forms.clone()
    }

    /// Strength labels under the selected form; empty until a form with data
    /// is selected.
    #[must_use]
    pub fn strength_options(&self) -> Vec<String> {
        self.selection
            .form()
            .and_then(|form| self.record.strengths(form))
            .map(|strengths| strengths.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Packing labels under the selected strength; empty until form and
    /// strength with data are selected.
    #[must_use]
    pub fn packing_options(&self) -> Vec<String> {
        let (Some(form), Some(strength)) = (self.selection.form(), self.selection.strength())
        else {
            return Vec::new();
        };
        self.record
            .packings(form, strength)
            .map(|packings| packings.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SaltRecord {
        serde_json::from_str(
            r#"{
                "salt": "Paracetamol",
                "available_forms": ["tablet", "syrup"],
                "salt_forms_json": {
                    "tablet": {
                        "250mg": {
                            "strip of 10 tablets": [
                                {"selling_price": 45},
                                {"selling_price": 39}
                            ],
                            "strip of 15 tablets": [
                                {"selling_price": 60}
                            ]
                        },
                        "500mg": {
                            "strip of 10 tablets": [
                                {"selling_price": 80}
                            ]
                        }
                    }
                }
            }"#,
        )
        .expect("record parses")
    }

    #[test]
    fn defaults_pick_first_form_strength_packing_and_first_entry_price() {
        let card = SaltCard::with_defaults(record());
        assert_eq!(card.selection.form(), Some("tablet"));
        assert_eq!(card.selection.strength(), Some("250mg"));
        assert_eq!(card.selection.packing(), Some("strip of 10 tablets"));
        assert_eq!(card.price, PriceStatus::Resolved(45.0));
    }

    #[test]
    fn explicit_packing_reselect_recomputes_the_lowest_price() {
        let mut card = SaltCard::with_defaults(record());
        card.select_packing("strip of 10 tablets");
        assert_eq!(card.price, PriceStatus::Resolved(39.0));
    }

    #[test]
    fn defaults_only_use_keys_present_in_the_data() {
        let card = SaltCard::with_defaults(record());
        let form = card.selection.form().expect("form selected");
        let strength = card.selection.strength().expect("strength selected");
        let packing = card.selection.packing().expect("packing selected");
        assert!(card.record.available_forms.iter().any(|f| f == form));
        assert!(card.record.entries(form, strength, packing).is_some());
    }

    #[test]
    fn selecting_a_form_resets_strength_packing_and_price() {
        let mut card = SaltCard::with_defaults(record());
        card.select_form("tablet");
        assert_eq!(card.selection.strength(), None);
        assert_eq!(card.selection.packing(), None);
        assert_eq!(card.price, PriceStatus::Unresolved);
    }

    #[test]
    fn selecting_a_form_without_data_surfaces_the_message() {
        let mut card = SaltCard::with_defaults(record());
        card.select_form("syrup");
        assert_eq!(card.selection.form(), Some("syrup"));
        assert_eq!(
            card.price,
            PriceStatus::Message(PriceMessage::MedicineUnavailable)
        );
        assert!(card.strength_options().is_empty());
    }

    #[test]
    fn selecting_a_strength_resets_packing_and_clears_price() {
        let mut card = SaltCard::with_defaults(record());
        card.select_strength("500mg");
        assert_eq!(card.selection.strength(), Some("500mg"));
        assert_eq!(card.selection.packing(), None);
        assert_eq!(card.price, PriceStatus::Unresolved);
    }

    #[test]
    fn strength_selection_without_a_form_is_ignored() {
        let mut card = SaltCard {
            record: record(),
            selection: Selection::None,
            price: PriceStatus::Unresolved,
        };
        card.select_strength("250mg");
        assert_eq!(card.selection, Selection::None);
    }

    #[test]
    fn selecting_an_absent_packing_never_panics() {
        let mut card = SaltCard::with_defaults(record());
        card.select_packing("bottle of 100ml");
        assert_eq!(
            card.price,
            PriceStatus::Message(PriceMessage::PackingUnavailable)
        );
        assert_eq!(card.selection.packing(), Some("bottle of 100ml"));
    }

    #[test]
    fn defaults_survive_a_record_with_no_forms() {
        let record: SaltRecord =
            serde_json::from_str(r#"{"salt": "Empty", "salt_forms_json": {}}"#).expect("parses");
        let card = SaltCard::with_defaults(record);
        assert_eq!(card.selection, Selection::None);
        assert_eq!(card.price, PriceStatus::Unresolved);
    }
}
