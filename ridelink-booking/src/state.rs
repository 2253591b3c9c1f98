use ridelink_domain::booking::{Booking, BookingStatus};

/// Local view of the principal's single booking. Terminal states keep the
/// booking around so dashboards can show the outcome until the next load.
#[derive(Debug, Clone)]
pub enum LifecycleState {
    None,
    Booked(Booking),
    InProgress(Booking),
    Completed(Booking),
    Cancelled(Booking),
}

impl LifecycleState {
    /// Classify the server's authoritative booking.
    pub fn from_booking(booking: Booking) -> Self {
        match booking.status {
            BookingStatus::Booked => LifecycleState::Booked(booking),
            BookingStatus::InProgress => LifecycleState::InProgress(booking),
            BookingStatus::Completed => LifecycleState::Completed(booking),
            BookingStatus::Cancelled => LifecycleState::Cancelled(booking),
        }
    }

    pub fn booking(&self) -> Option<&Booking> {
        match self {
            LifecycleState::None => None,
            LifecycleState::Booked(b)
            | LifecycleState::InProgress(b)
            | LifecycleState::Completed(b)
            | LifecycleState::Cancelled(b) => Some(b),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, LifecycleState::None)
    }

    /// BOOKED or IN_PROGRESS, the only non-terminal values.
    pub fn is_active(&self) -> bool {
        matches!(self, LifecycleState::Booked(_) | LifecycleState::InProgress(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LifecycleState::Completed(_) | LifecycleState::Cancelled(_)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            LifecycleState::None => "NONE",
            LifecycleState::Booked(_) => "BOOKED",
            LifecycleState::InProgress(_) => "IN_PROGRESS",
            LifecycleState::Completed(_) => "COMPLETED",
            LifecycleState::Cancelled(_) => "CANCELLED",
        }
    }

    /// User-facing status label, when there is a booking to label.
    pub fn display_status(&self) -> Option<&'static str> {
        self.booking().map(|b| b.status.display())
    }
}
