//! Decoded tabular records and the candidate envelope built on them.

mod candidate;
mod classification;
mod row;
#[cfg(feature = "serde")]
mod serde_;
mod value;

pub use candidate::{Candidate, KnownFields, CLASSIFICATION_COLUMN, PNG_FILE_COLUMN};
pub use classification::Classification;
pub use row::Row;
pub use value::FieldValue;
