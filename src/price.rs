//! Lowest-price resolution for a fully specified drill-down.

use std::fmt;

use crate::types::SaltRecord;

/// Price state carried by each salt card.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceStatus {
    /// Selection incomplete, price deliberately cleared.
    Unresolved,
    /// A concrete price in rupees.
    Resolved(f64),
    /// Inline unavailability note shown in place of a price.
    Message(PriceMessage),
}

/// The three ways a selection can fail to produce a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMessage {
    MedicineUnavailable,
    PackingUnavailable,
    NoValidPrice,
}

impl fmt::Display for PriceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PriceMessage::MedicineUnavailable => "Selected medicine is not available",
            PriceMessage::PackingUnavailable => "Selected packing is not available",
            PriceMessage::NoValidPrice => "No valid price available for selected packing",
        };
        f.write_str(text)
    }
}

/// Compute the lowest numeric `selling_price` under the given selection.
///
/// Pure function of the record and the three selection levels. Entries
/// without a numeric price are skipped; a missing key at any level degrades
/// to the matching message rather than an error.
#[must_use]
pub fn resolve_lowest_price(
    record: &SaltRecord,
    form: &str,
    strength: Option<&str>,
    packing: Option<&str>,
) -> PriceStatus {
    let (Some(strength), Some(packing)) = (strength, packing) else {
        return PriceStatus::Message(PriceMessage::MedicineUnavailable);
    };

    let Some(entries) = record.entries(form, strength, packing) else {
        return PriceStatus::Message(PriceMessage::PackingUnavailable);
    };

    let lowest = entries
        .iter()
        .filter_map(|entry| entry.selling_price)
        .reduce(f64::min);

    match lowest {
        Some(price) => PriceStatus::Resolved(price),
        None => PriceStatus::Message(PriceMessage::NoValidPrice),
    }
}
