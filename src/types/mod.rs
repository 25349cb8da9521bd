mod outcome;
mod salt;

pub use outcome::{SaltSelection, SearchOutcome};
pub use salt::{FormMap, PackingMap, PriceEntry, SaltRecord, StrengthMap};
