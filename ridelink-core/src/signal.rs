use ridelink_domain::booking::BookingStatus;
use uuid::Uuid;

/// Broadcast after a terminal booking transition. History lists and the
/// admin booking views subscribe and refetch; active and history views are
/// one data source split across two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRefresh {
    pub booking_id: Uuid,
    pub terminal_status: BookingStatus,
}
