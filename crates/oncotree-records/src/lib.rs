//! Record store for clinical data files.
//!
//! Input files start with any number of metadata lines carrying a comment
//! prefix (`#` by default), followed by one tab-separated header line and
//! the data rows. Records are keyed by header name; writing reproduces the
//! header and emits an empty string for any column a record lacks.

pub mod error;
pub mod record;
pub mod store;

pub use error::{RecordError, Result};
pub use record::Record;
pub use store::{read_records, write_records, write_to, ReadOptions, RecordFile};
