//! Error types for the portfolio API
//!
//! # Error Categories
//!
//! - **ValidationErrors**: every schema rule a request broke, gathered in one pass
//! - **ApiError**: what a handler returns; maps onto 422 / 404 / 500 responses
//!
//! Mail relay failures live in
//! [`crate::services::notification::NotificationError`] and never become an
//! `ApiError`.

pub mod api_error;
pub mod validation;

pub use api_error::{ApiError, ApiErrorKind};
pub use validation::{FieldViolation, Rule, ValidationErrors};

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;
