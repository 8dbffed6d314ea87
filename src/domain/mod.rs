//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, ranges, percentages, errors)
//! - `proposal` - The versioned proposal document and its default template
//! - `analysis` - Pure domain services (scenario metrics, capacity check)

pub mod analysis;
pub mod foundation;
pub mod proposal;
