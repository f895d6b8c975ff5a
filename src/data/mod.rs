//! Data module - payload decoding and member entry loading

mod entries;
mod loader;
mod payload;
mod source;

pub use entries::{build_comparison, DateRange, MemberEntries, WeightEntry, DATE_FORMAT};
pub use loader::{DataLoader, LoaderError};
pub use payload::{decode_payload, read_payload_file, PayloadError, WeightDataset};
pub use source::{DatasetSource, SourceError};
