//! Expense records, create payloads, and list summaries.

pub mod draft;
pub mod record;
pub mod summary;

pub use draft::*;
pub use record::*;
pub use summary::*;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
