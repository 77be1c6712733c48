use crate::error::{StockError, ValidationError};
use crate::logic::messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    Network,
    NotFound,     // HTTP 404
    Rejected,     // HTTP 4xx other than 404
    ServerError,  // HTTP 500+
    BadResponse,  // 2xx with an unreadable body
    Validation,
}

/// Classify an error for logging and toast wording
pub fn classify_error(error: &StockError) -> ErrorType {
    match error {
        StockError::Network(_) => ErrorType::Network,
        StockError::Http { status, .. } => match status {
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Rejected,
        },
        StockError::Decode(_) => ErrorType::BadResponse,
        StockError::Validation(_) => ErrorType::Validation,
    }
}

/// Localized message for a rejected input
pub fn validation_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::EmptyName => messages::NAME_EMPTY,
        ValidationError::NameTooLong { .. } => messages::NAME_TOO_LONG,
        ValidationError::NotAnInteger { field: "inventory", .. } => messages::INVENTORY_NOT_INTEGER,
        ValidationError::NotAnInteger { .. } => messages::CATEGORY_NOT_INTEGER,
        ValidationError::OutOfRange { field: "inventory", .. } => messages::INVENTORY_NEGATIVE,
        ValidationError::OutOfRange { .. } => messages::CATEGORY_INVALID,
        ValidationError::MissingCategory => messages::CATEGORY_MISSING,
    }
}

/// Toast text for a failed action: specific for validation, generic otherwise
pub fn format_error_message(error: &StockError, generic: &'static str) -> &'static str {
    match error {
        StockError::Validation(v) => validation_message(v),
        _ => generic,
    }
}
