use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Vendor price entries keyed by packing label, in backend order.
pub type PackingMap = IndexMap<String, Vec<PriceEntry>>;
/// Packing maps keyed by strength label, in backend order.
pub type StrengthMap = IndexMap<String, PackingMap>;
/// Strength maps keyed by form label, in backend order.
pub type FormMap = IndexMap<String, StrengthMap>;

/// One salt suggestion as returned by the search endpoint. Immutable once
/// fetched; all drill-down state lives in [`crate::selection::SaltCard`].
///
/// The nested maps keep the backend's key order because "first key" is the
/// rule used to derive default selections.
#[derive(Debug, Clone, Deserialize)]
pub struct SaltRecord {
    pub salt: String,
    #[serde(default)]
    pub available_forms: Vec<String>,
    #[serde(default, rename = "salt_forms_json")]
    pub forms: FormMap,
}

impl SaltRecord {
    /// Strength map for `form`, or `None` when the form has no data.
    #[must_use]
    pub fn strengths(&self, form: &str) -> Option<&StrengthMap> {
        self.forms.get(form)
    }

    /// Packing map for `(form, strength)`, or `None` when either level is
    /// missing.
    #[must_use]
    pub fn packings(&self, form: &str, strength: &str) -> Option<&PackingMap> {
        self.strengths(form)?.get(strength)
    }

    /// Vendor entries for a fully specified `(form, strength, packing)`
    /// triple, or `None` when any level is missing.
    #[must_use]
    pub fn entries(&self, form: &str, strength: &str, packing: &str) -> Option<&[PriceEntry]> {
        self.packings(form, strength)?
            .get(packing)
            .map(Vec::as_slice)
    }
}

/// One vendor offer under a packing. The backend is sloppy about
/// `selling_price` (null, missing, or the occasional string), so decoding is
/// lenient: anything non-numeric becomes `None` and the resolver skips it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceEntry {
    #[serde(default, deserialize_with = "lenient_price")]
    pub selling_price: Option<f64>,
}

impl PriceEntry {
    #[must_use]
    pub fn new(selling_price: impl Into<Option<f64>>) -> Self {
        Self {
            selling_price: selling_price.into(),
        }
    }
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from_json(json: &str) -> SaltRecord {
        serde_json::from_str(json).expect("record parses")
    }

    #[test]
    fn nested_maps_preserve_backend_key_order() {
        let record = record_from_json(
            r#"{
                "salt": "Amoxycillin",
                "available_forms": ["tablet", "syrup"],
                "salt_forms_json": {
                    "tablet": {
                        "500mg": {"strip of 10 tablets": [{"selling_price": 12}]},
                        "250mg": {"strip of 15 tablets": [{"selling_price": 9}]}
                    }
                }
            }"#,
        );

        let strengths = record.strengths("tablet").expect("tablet data");
        assert_eq!(strengths.keys().next().map(String::as_str), Some("500mg"));
    }

    #[test]
    fn missing_levels_return_none_instead_of_panicking() {
        let record = record_from_json(r#"{"salt": "X", "salt_forms_json": {}}"#);
        assert!(record.strengths("tablet").is_none());
        assert!(record.packings("tablet", "250mg").is_none());
        assert!(record.entries("tablet", "250mg", "strip").is_none());
    }

    #[test]
    fn lenient_price_ignores_non_numeric_values() {
        let entries: Vec<PriceEntry> = serde_json::from_str(
            r#"[
                {"selling_price": 45.5},
                {"selling_price": null},
                {"selling_price": "n/a"},
                {}
            ]"#,
        )
        .expect("entries parse");

        let prices: Vec<Option<f64>> = entries.iter().map(|e| e.selling_price).collect();
        assert_eq!(prices, vec![Some(45.5), None, None, None]);
    }
}
