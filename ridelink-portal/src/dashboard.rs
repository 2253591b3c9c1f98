use ridelink_core::api::{BookingFilter, DirectoryApi};
use ridelink_core::paging::PageRequest;
use ridelink_core::ApiResult;

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryCounts {
    pub customers: u32,
    pub drivers: u32,
    pub cabs: u32,
    pub active_bookings: u32,
}

/// Count via size=1 probes: with one row per page, the server's totalPages
/// equals the total row count.
pub async fn load_counts(api: &dyn DirectoryApi) -> ApiResult<DirectoryCounts> {
    let probe = PageRequest::count_probe();

    let customers = api.customers(probe).await?.total_pages;
    let drivers = api.drivers(probe).await?.total_pages;
    let cabs = api.cabs(probe).await?.total_pages;
    let active_bookings = api.bookings(BookingFilter::Active, probe).await?.total_pages;

    Ok(DirectoryCounts {
        customers,
        drivers,
        cabs,
        active_bookings,
    })
}
