mod actions;
mod fetch;
mod render;
mod runtime;
mod state;

pub use state::{App, DISCLOSURE_LIMIT, Disclosure, Tier, ViewMode};
