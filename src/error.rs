//! Error types for the bsgrid library.
//!
//! Fallible operations return `Result<T, BsGridError>`. Failing to converge
//! on an implied volatility is deliberately *not* an error: the solver
//! reports it in-band as `None` so that batch grid evaluation can continue
//! past individual unresolved cells.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, BsGridError>;

/// Errors that can occur while pricing options or inverting for volatility.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BsGridError {
    /// The request shape is malformed (e.g., the observed-price count does
    /// not match the grid size). Raised before any pricing work starts.
    #[error("invalid request: {message}")]
    Validation { message: String },

    /// A parameter violates a mathematical precondition of the pricing
    /// formula (non-positive spot, strike, volatility or time to expiry).
    #[error("domain error: {message}")]
    Domain { message: String },
}

impl BsGridError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = BsGridError::validation("price_list too short");
        assert!(format!("{err}").contains("price_list too short"));

        let err = BsGridError::domain("strike must be positive");
        assert!(format!("{err}").contains("strike must be positive"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BsGridError>();
    }
}
