use anyhow::Result;
use saltscout::{PriceStatus, SearchOutcome};
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
    println!("{}", format_outcome_plain(outcome));
}

/// Format the session outcome as a single plain-text line.
fn format_outcome_plain(outcome: &SearchOutcome) -> String {
    if !outcome.accepted {
        return format!("Search cancelled (query: '{}')", outcome.query);
    }

    match &outcome.selection {
        Some(selection) => {
            let price = match &selection.price {
                PriceStatus::Resolved(price) => format!("From ₹{price}"),
                PriceStatus::Message(message) => message.to_string(),
                PriceStatus::Unresolved => "price not resolved".to_string(),
            };
            format!(
                "{}: {} | {} | {} - {}",
                selection.salt,
                selection.form.as_deref().unwrap_or(""),
                selection.strength.as_deref().unwrap_or(""),
                selection.packing.as_deref().unwrap_or(""),
                price,
            )
        }
        None => "No selection".to_string(),
    }
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
    let selection = match &outcome.selection {
        Some(selection) => {
            let price = match &selection.price {
                PriceStatus::Resolved(price) => json!(price),
                PriceStatus::Message(message) => json!(message.to_string()),
                PriceStatus::Unresolved => serde_json::Value::Null,
            };
            json!({
                "salt": selection.salt,
                "form": selection.form,
                "strength": selection.strength,
                "packing": selection.packing,
                "price": price,
            })
        }
        None => serde_json::Value::Null,
    };

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
