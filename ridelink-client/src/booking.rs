use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use ridelink_core::api::{CustomerBookingApi, DriverBookingApi};
use ridelink_core::paging::{Page, PageRequest};
use ridelink_core::ApiResult;
use ridelink_domain::booking::{Booking, BookingInput};

use crate::http::HttpApi;

#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    booking_id: Uuid,
    pickup: &'a str,
    destination: &'a str,
    trip_distance_km: f64,
}

#[derive(Debug, Serialize)]
struct BookingRef {
    booking_id: Uuid,
}

#[async_trait]
impl CustomerBookingApi for HttpApi {
    async fn create(&self, input: &BookingInput) -> ApiResult<Booking> {
        self.post_json("/booking/customer/booked", input).await
    }

    async fn update(&self, booking_id: Uuid, input: &BookingInput) -> ApiResult<Booking> {
        let body = UpdateBody {
            booking_id,
            pickup: &input.pickup,
            destination: &input.destination,
            trip_distance_km: input.trip_distance_km,
        };
        self.put_json("/booking/customer/update", &body).await
    }

    async fn cancel(&self, booking_id: Uuid) -> ApiResult<Booking> {
        self.put_json("/booking/customer/cancel", &BookingRef { booking_id })
            .await
    }

    async fn active(&self) -> ApiResult<Booking> {
        self.get_json("/booking/customer/active").await
    }

    async fn completed(&self, page: PageRequest) -> ApiResult<Page<Booking>> {
        self.get_page("/booking/customer/completed", page).await
    }

    async fn cancelled(&self, page: PageRequest) -> ApiResult<Page<Booking>> {
        self.get_page("/booking/customer/cancelled", page).await
    }
}

#[async_trait]
impl DriverBookingApi for HttpApi {
    async fn active(&self) -> ApiResult<Booking> {
        self.get_json("/booking/driver/active").await
    }

    async fn complete(&self, booking_id: Uuid) -> ApiResult<Booking> {
        self.put_json("/booking/driver/complete", &BookingRef { booking_id })
            .await
    }
}
