pub mod api;
pub mod paging;
pub mod signal;
pub mod token;

use ridelink_domain::ValidationErrors;

/// Error taxonomy at the remote boundary. Every caller above the HTTP
/// client sees this one shape.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Field-tagged messages, local or server-reported. Resolved at the
    /// component boundary; never surfaced globally.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// 401 or an expired token, including mid-flight expiry. Always
    /// escalated to the session store's logout path.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Referenced booking/customer/driver/cab is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport failure or a server error without a structured message.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
