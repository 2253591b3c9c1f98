use async_trait::async_trait;
use serde::Serialize;

use ridelink_core::api::AuthApi;
use ridelink_core::ApiResult;
use ridelink_domain::identity::LoginResponse;
use ridelink_domain::profile::{CustomerSignup, DriverSignup};

use crate::http::HttpApi;

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        self.post_json("/login", &LoginBody { email, password }).await
    }

    async fn register_customer(&self, signup: &CustomerSignup) -> ApiResult<()> {
        self.post_empty("/signup/customer", signup).await
    }

    async fn register_driver(&self, signup: &DriverSignup) -> ApiResult<()> {
        self.post_empty("/signup/driver", signup).await
    }
}
