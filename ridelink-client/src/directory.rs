use async_trait::async_trait;

use ridelink_core::api::{BookingFilter, DirectoryApi};
use ridelink_core::paging::{Page, PageRequest};
use ridelink_core::ApiResult;
use ridelink_domain::booking::Booking;
use ridelink_domain::profile::{Cab, CustomerProfile, DriverProfile};

use crate::http::HttpApi;

#[async_trait]
impl DirectoryApi for HttpApi {
    async fn customers(&self, page: PageRequest) -> ApiResult<Page<CustomerProfile>> {
        self.get_page("/admin/customers", page).await
    }

    async fn drivers(&self, page: PageRequest) -> ApiResult<Page<DriverProfile>> {
        self.get_page("/admin/drivers", page).await
    }

    async fn cabs(&self, page: PageRequest) -> ApiResult<Page<Cab>> {
        self.get_page("/admin/cabs", page).await
    }

    async fn bookings(
        &self,
        filter: BookingFilter,
        page: PageRequest,
    ) -> ApiResult<Page<Booking>> {
        let path = format!("/admin/bookings{}", filter.path_segment());
        self.get_page(&path, page).await
    }
}
