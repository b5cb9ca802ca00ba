//! Plain-text output formatters.
//!
//! Pure functions from decoded records to the text returned to the caller.
//! Missing fields render placeholders; nothing here can fail.

mod listing;
mod reports;
mod records;

pub use listing::*;
pub use reports::*;
pub use records::*;
