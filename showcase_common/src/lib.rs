//! Shared types for the project showcase
//!
//! Holds the project record model, its validation step and the error type
//! produced when a serialized collection cannot be accepted.

pub mod error;
pub mod record;

pub use error::RecordError;
pub use record::{parse_records, ProjectRecord, RawProjectRecord};
