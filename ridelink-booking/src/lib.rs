pub mod customer;
pub mod driver;
pub mod state;

pub use customer::CustomerBooking;
pub use driver::DriverBooking;
pub use state::LifecycleState;

use ridelink_core::ApiError;
use ridelink_domain::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Local or server-reported field errors; resolved at the form, never
    /// surfaced globally.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A prior transition's response is still pending.
    #[error("another transition is already in flight")]
    TransitionInFlight,

    #[error("invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for BookingError {
    fn from(err: ApiError) -> Self {
        match err {
            // Server validation merges into the same field-map shape
            ApiError::Validation(errors) => BookingError::Validation(errors),
            other => BookingError::Api(other),
        }
    }
}
