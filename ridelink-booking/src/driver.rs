use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use ridelink_core::api::DriverBookingApi;
use ridelink_core::signal::HistoryRefresh;
use ridelink_domain::booking::Booking;

use crate::state::LifecycleState;
use crate::BookingError;

/// Driver side of the lifecycle. There is exactly one booking assigned to
/// the driver's cab at a time; completing it is the driver's only
/// transition.
pub struct DriverBooking {
    api: Arc<dyn DriverBookingApi>,
    refresh_tx: broadcast::Sender<HistoryRefresh>,
    state: LifecycleState,
    busy: bool,
}

impl DriverBooking {
    pub fn new(
        api: Arc<dyn DriverBookingApi>,
        refresh_tx: broadcast::Sender<HistoryRefresh>,
    ) -> Self {
        Self {
            api,
            refresh_tx,
            state: LifecycleState::None,
            busy: false,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The trip can only be completed once it is underway.
    pub fn can_complete(&self) -> bool {
        matches!(self.state, LifecycleState::InProgress(_)) && !self.busy
    }

    /// Fetch the booking currently assigned to this driver's cab; the
    /// expected NotFound maps to NONE.
    pub async fn load_active(&mut self) -> Result<&LifecycleState, BookingError> {
        if self.busy {
            return Err(BookingError::TransitionInFlight);
        }
        self.busy = true;
        let result = self.api.active().await;
        self.busy = false;

        match result {
            Ok(booking) => self.state = LifecycleState::from_booking(booking),
            Err(err) if err.is_not_found() => self.state = LifecycleState::None,
            Err(err) => return Err(err.into()),
        }
        Ok(&self.state)
    }

    /// IN_PROGRESS -> COMPLETED. Anything else is rejected locally before
    /// the network, including a booking still in BOOKED.
    pub async fn complete(&mut self) -> Result<Booking, BookingError> {
        let booking_id = match &self.state {
            LifecycleState::InProgress(b) => b.id,
            other => {
                return Err(BookingError::InvalidTransition {
                    from: other.name().to_string(),
                    to: "COMPLETED".to_string(),
                })
            }
        };
        if self.busy {
            return Err(BookingError::TransitionInFlight);
        }

        self.busy = true;
        let result = self.api.complete(booking_id).await;
        self.busy = false;

        let booking = result?;
        info!("booking {} completed", booking.id);
        self.state = LifecycleState::from_booking(booking.clone());
        if booking.status.is_terminal() {
            let _ = self.refresh_tx.send(HistoryRefresh {
                booking_id: booking.id,
                terminal_status: booking.status,
            });
        }
        Ok(booking)
    }
}
