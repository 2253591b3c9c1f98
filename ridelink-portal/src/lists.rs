use std::sync::Arc;

use async_trait::async_trait;

use ridelink_core::api::{BookingFilter, CustomerBookingApi, DirectoryApi};
use ridelink_core::paging::{Page, PageRequest};
use ridelink_core::ApiResult;
use ridelink_domain::booking::Booking;
use ridelink_domain::profile::{Cab, CustomerProfile, DriverProfile};
use ridelink_query::PageFetcher;

/// Which half of the customer's history a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    Completed,
    Cancelled,
}

/// Backs the customer history screens. Subscribes nothing itself: the
/// screen listens for HistoryRefresh signals and calls refresh().
pub struct CustomerHistoryLists {
    api: Arc<dyn CustomerBookingApi>,
}

impl CustomerHistoryLists {
    pub fn new(api: Arc<dyn CustomerBookingApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PageFetcher<Booking, HistoryFilter> for CustomerHistoryLists {
    async fn fetch_page(
        &self,
        filter: &HistoryFilter,
        request: PageRequest,
    ) -> ApiResult<Page<Booking>> {
        match filter {
            HistoryFilter::Completed => self.api.completed(request).await,
            HistoryFilter::Cancelled => self.api.cancelled(request).await,
        }
    }
}

/// Backs the admin booking list with its server-side status filter.
pub struct AdminBookingList {
    api: Arc<dyn DirectoryApi>,
}

impl AdminBookingList {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PageFetcher<Booking, BookingFilter> for AdminBookingList {
    async fn fetch_page(
        &self,
        filter: &BookingFilter,
        request: PageRequest,
    ) -> ApiResult<Page<Booking>> {
        self.api.bookings(*filter, request).await
    }
}

/// Unfiltered admin directories share the unit filter.
pub struct AdminCustomerList {
    api: Arc<dyn DirectoryApi>,
}

impl AdminCustomerList {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PageFetcher<CustomerProfile, ()> for AdminCustomerList {
    async fn fetch_page(&self, _filter: &(), request: PageRequest) -> ApiResult<Page<CustomerProfile>> {
        self.api.customers(request).await
    }
}

pub struct AdminDriverList {
    api: Arc<dyn DirectoryApi>,
}

impl AdminDriverList {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PageFetcher<DriverProfile, ()> for AdminDriverList {
    async fn fetch_page(&self, _filter: &(), request: PageRequest) -> ApiResult<Page<DriverProfile>> {
        self.api.drivers(request).await
    }
}

pub struct AdminCabList {
    api: Arc<dyn DirectoryApi>,
}

impl AdminCabList {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PageFetcher<Cab, ()> for AdminCabList {
    async fn fetch_page(&self, _filter: &(), request: PageRequest) -> ApiResult<Page<Cab>> {
        self.api.cabs(request).await
    }
}
