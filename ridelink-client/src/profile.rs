use async_trait::async_trait;

use ridelink_core::api::ProfileApi;
use ridelink_core::ApiResult;
use ridelink_domain::profile::{
    CustomerProfile, CustomerProfileForm, DriverProfile, DriverProfileForm,
};

use crate::http::HttpApi;

#[async_trait]
impl ProfileApi for HttpApi {
    async fn customer_me(&self) -> ApiResult<CustomerProfile> {
        self.get_json("/customer/me").await
    }

    async fn create_customer_profile(
        &self,
        form: &CustomerProfileForm,
    ) -> ApiResult<CustomerProfile> {
        self.post_json("/customer/me", form).await
    }

    async fn update_customer_profile(
        &self,
        form: &CustomerProfileForm,
    ) -> ApiResult<CustomerProfile> {
        self.put_json("/customer/me", form).await
    }

    async fn delete_customer_profile(&self) -> ApiResult<()> {
        self.delete_empty("/customer/me").await
    }

    async fn driver_me(&self) -> ApiResult<DriverProfile> {
        self.get_json("/driver/me").await
    }

    async fn create_driver_profile(&self, form: &DriverProfileForm) -> ApiResult<DriverProfile> {
        self.post_json("/driver/me", form).await
    }

    async fn update_driver_profile(&self, form: &DriverProfileForm) -> ApiResult<DriverProfile> {
        self.put_json("/driver/me", form).await
    }

    async fn delete_driver_profile(&self) -> ApiResult<()> {
        self.delete_empty("/driver/me").await
    }
}
