use crate::price::PriceStatus;

/// Result of an interactive session, printed by the CLI on exit.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub accepted: bool,
    pub query: String,
    pub selection: Option<SaltSelection>,
}

/// Snapshot of the highlighted card's drill-down at the moment the user
/// accepted or cancelled.
#[derive(Debug, Clone)]
pub struct SaltSelection {
    pub salt: String,
    pub form: Option<String>,
    pub strength: Option<String>,
    pub packing: Option<String>,
    pub price: PriceStatus,
}
