//! Business Logic
//!
//! Pure functions that can be unit tested without a backend or terminal:
//! - errors: Error classification and toast wording
//! - messages: User-facing notification text
//! - pagination: Page button state and targets
//! - query: Request parameters and location query parsing
//! - render: Table render instruction list
//! - sorting: Sort tuple toggling
//! - validation: Form input to request payloads

pub mod errors;
pub mod messages;
pub mod pagination;
pub mod query;
pub mod render;
pub mod sorting;
pub mod validation;
