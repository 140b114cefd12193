//! `opsuite-core`: shared building blocks for the OpSuite back end.
//!
//! Pure types only: error model, record identifiers, the pagination envelope
//! and small numeric helpers. No HTTP, no IO.

pub mod error;
pub mod id;
pub mod pagination;
pub mod progress;

pub use error::DomainError;
pub use id::RecordId;
pub use pagination::{PageRequest, PageSource, PaginatedResponse, PaginationError};
pub use progress::progress_percent;
