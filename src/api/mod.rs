mod client;

pub use client::{ApiError, DEFAULT_ENDPOINT, DEFAULT_PHARMACY_IDS, SearchClient};
