use thiserror::Error;

/// Failures talking to the stock backend or validating user input
#[derive(Debug, Error)]
pub enum StockError {
    /// The request never produced a response (DNS, refused, reset, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("{method} {path} -> {status}")]
    Http {
        method: &'static str,
        path: String,
        status: u16,
        detail: Option<String>,
    },

    /// A 2xx body that is not the expected JSON
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StockError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StockError::Validation(_))
    }

    /// HTTP status when the backend rejected the request
    pub fn status(&self) -> Option<u16> {
        match self {
            StockError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Reason text from the backend's error body, if it sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            StockError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StockError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StockError::Decode(err.to_string())
        } else {
            StockError::Network(err.to_string())
        }
    }
}

/// Input rejected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is empty")]
    EmptyName,

    #[error("name is longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("{field} must be an integer, got {raw:?}")]
    NotAnInteger { field: &'static str, raw: String },

    #[error("{field} must be at least {min}")]
    OutOfRange { field: &'static str, min: i64 },

    #[error("no category selected")]
    MissingCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = StockError::Http {
            method: "PUT",
            path: "/api/stocks/7".to_string(),
            status: 404,
            detail: None,
        };
        assert_eq!(err.to_string(), "PUT /api/stocks/7 -> 404");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_http_error_detail() {
        let err = StockError::Http {
            method: "POST",
            path: "/api/stocks".to_string(),
            status: 400,
            detail: Some("name already exists".to_string()),
        };
        assert_eq!(err.detail(), Some("name already exists"));
        assert_eq!(StockError::Network("refused".to_string()).detail(), None);
    }

    #[test]
    fn test_validation_converts_transparently() {
        let err: StockError = ValidationError::NotAnInteger {
            field: "inventory",
            raw: "3.5".to_string(),
        }
        .into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "inventory must be an integer, got \"3.5\"");
        assert_eq!(err.status(), None);
        assert_eq!(err.detail(), None);
    }
}
