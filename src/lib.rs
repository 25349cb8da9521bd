//! Core crate exports for building and running the `saltscout` terminal
//! interface.
//!
//! The root module re-exports the record, selection, and pricing types so
//! that embedders can drive the salt search state machine without digging
//! through the module hierarchy.

pub mod api;
pub mod app;
pub mod app_dirs;
mod fetch;
pub mod input;
pub mod logging;
pub mod price;
pub mod selection;
pub mod theme;
pub mod types;

pub use api::SearchClient;
pub use app::{App, Disclosure, Tier, ViewMode};
pub use price::{PriceMessage, PriceStatus, resolve_lowest_price};
pub use selection::{SaltCard, Selection};
pub use theme::{Theme, default_theme};
pub use types::{PriceEntry, SaltRecord, SaltSelection, SearchOutcome};
