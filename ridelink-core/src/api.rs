use async_trait::async_trait;
use uuid::Uuid;

use ridelink_domain::booking::{Booking, BookingInput};
use ridelink_domain::identity::LoginResponse;
use ridelink_domain::profile::{
    Cab, CustomerProfile, CustomerProfileForm, CustomerSignup, DriverProfile, DriverProfileForm,
    DriverSignup,
};

use crate::paging::{Page, PageRequest};
use crate::ApiResult;

/// Authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// POST /login
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse>;

    /// POST /signup/customer
    async fn register_customer(&self, signup: &CustomerSignup) -> ApiResult<()>;

    /// POST /signup/driver
    async fn register_driver(&self, signup: &DriverSignup) -> ApiResult<()>;
}

/// Profile CRUD for the authenticated principal. A missing profile decodes
/// as NotFound and means the account is not yet profile-complete.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn customer_me(&self) -> ApiResult<CustomerProfile>;

    async fn create_customer_profile(&self, form: &CustomerProfileForm)
        -> ApiResult<CustomerProfile>;

    async fn update_customer_profile(&self, form: &CustomerProfileForm)
        -> ApiResult<CustomerProfile>;

    async fn delete_customer_profile(&self) -> ApiResult<()>;

    async fn driver_me(&self) -> ApiResult<DriverProfile>;

    async fn create_driver_profile(&self, form: &DriverProfileForm) -> ApiResult<DriverProfile>;

    async fn update_driver_profile(&self, form: &DriverProfileForm) -> ApiResult<DriverProfile>;

    async fn delete_driver_profile(&self) -> ApiResult<()>;
}

/// Customer side of the booking lifecycle. The server owns fare and status
/// computation; every mutation returns the authoritative booking.
#[async_trait]
pub trait CustomerBookingApi: Send + Sync {
    /// POST /booking/customer/booked
    async fn create(&self, input: &BookingInput) -> ApiResult<Booking>;

    /// PUT /booking/customer/update
    async fn update(&self, booking_id: Uuid, input: &BookingInput) -> ApiResult<Booking>;

    /// PUT /booking/customer/cancel
    async fn cancel(&self, booking_id: Uuid) -> ApiResult<Booking>;

    /// GET /booking/customer/active; NotFound when there is none.
    async fn active(&self) -> ApiResult<Booking>;

    /// GET /booking/customer/completed
    async fn completed(&self, page: PageRequest) -> ApiResult<Page<Booking>>;

    /// GET /booking/customer/cancelled
    async fn cancelled(&self, page: PageRequest) -> ApiResult<Page<Booking>>;
}

/// Driver side of the booking lifecycle.
#[async_trait]
pub trait DriverBookingApi: Send + Sync {
    /// GET /booking/driver/active; NotFound when there is none.
    async fn active(&self) -> ApiResult<Booking>;

    /// PUT /booking/driver/complete
    async fn complete(&self, booking_id: Uuid) -> ApiResult<Booking>;
}

/// Server-side status filter for admin booking lists. Changing it is a
/// refetch, unlike the local text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFilter {
    All,
    Active,
    Completed,
    Cancelled,
}

impl BookingFilter {
    pub fn path_segment(&self) -> &'static str {
        match self {
            BookingFilter::All => "",
            BookingFilter::Active => "/active",
            BookingFilter::Completed => "/completed",
            BookingFilter::Cancelled => "/cancelled",
        }
    }
}

/// Admin directory queries, all paged.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// GET /admin/customers?page&size
    async fn customers(&self, page: PageRequest) -> ApiResult<Page<CustomerProfile>>;

    /// GET /admin/drivers?page&size
    async fn drivers(&self, page: PageRequest) -> ApiResult<Page<DriverProfile>>;

    /// GET /admin/cabs?page&size
    async fn cabs(&self, page: PageRequest) -> ApiResult<Page<Cab>>;

    /// GET /admin/bookings[/active|...]?page&size
    async fn bookings(&self, filter: BookingFilter, page: PageRequest)
        -> ApiResult<Page<Booking>>;
}
