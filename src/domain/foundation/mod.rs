//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the proposal domain.

mod errors;
mod ids;
mod percentage;
mod range;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChannelId, EntryId, ScenarioId, GENERATED_ID_LEN};
pub use percentage::Percentage;
pub use range::ValueRange;
