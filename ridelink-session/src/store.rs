use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use ridelink_core::api::{AuthApi, ProfileApi};
use ridelink_core::token::{SessionRecord, TokenCache};
use ridelink_core::{ApiError, ApiResult};
use ridelink_domain::identity::{Principal, Role, Session};
use ridelink_domain::profile::{CustomerSignup, DriverSignup};

use crate::routes::Route;

/// Owns the process-wide session: principal, role and token lifecycle.
/// Single writer of `role` and `profile_complete`; every other component
/// only reads.
pub struct SessionStore {
    auth: Arc<dyn AuthApi>,
    profile: Arc<dyn ProfileApi>,
    cache: Arc<dyn TokenCache>,
    session: Option<Session>,
}

impl SessionStore {
    pub fn new(
        auth: Arc<dyn AuthApi>,
        profile: Arc<dyn ProfileApi>,
        cache: Arc<dyn TokenCache>,
    ) -> Self {
        Self {
            auth,
            profile,
            cache,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.principal.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Authenticate and adopt the returned principal. The redirect target
    /// is a pure function of the role; an unrecognized role lands on the
    /// home page without establishing a session.
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<Route> {
        let response = self.auth.login(email, password).await?;

        let role = match Role::parse(&response.role) {
            Some(role) => role,
            None => {
                warn!("login returned unrecognized role: {}", response.role);
                return Ok(Route::Home);
            }
        };

        let session = Session {
            principal: Principal {
                id: response.user.id,
                email: response.user.email,
                role,
                profile_complete: response.user.profile_complete,
            },
            token: response.token,
            issued_at: Utc::now(),
        };

        self.cache.save(&SessionRecord {
            token: session.token.clone(),
            principal: session.principal.clone(),
            issued_at: session.issued_at,
        });
        info!(
            "login succeeded for {} as {}",
            session.principal.email,
            role.as_str()
        );

        self.session = Some(session);
        Ok(Route::dashboard_for(Some(role)))
    }

    /// Register a customer account. Does not authenticate the caller.
    pub async fn register_customer(&self, signup: &CustomerSignup) -> ApiResult<()> {
        signup.validate().map_err(ApiError::Validation)?;
        self.auth.register_customer(signup).await
    }

    /// Register a driver account, license and vehicle included.
    pub async fn register_driver(&self, signup: &DriverSignup) -> ApiResult<()> {
        signup.validate().map_err(ApiError::Validation)?;
        self.auth.register_driver(signup).await
    }

    /// Re-read profile completeness from the profile endpoint; used after
    /// the profile-creation flow. A missing profile is the incomplete
    /// state, not an error.
    pub async fn refresh_profile(&mut self) -> ApiResult<&Session> {
        let role = match &self.session {
            Some(session) => session.principal.role,
            None => return Err(ApiError::Auth("no active session".to_string())),
        };

        let complete = match role {
            Role::Admin => true,
            Role::Customer => match self.profile.customer_me().await {
                Ok(_) => true,
                Err(err) if err.is_not_found() => false,
                Err(err) => return Err(err),
            },
            Role::Driver => match self.profile.driver_me().await {
                Ok(_) => true,
                Err(err) if err.is_not_found() => false,
                Err(err) => return Err(err),
            },
        };

        if let Some(session) = &mut self.session {
            session.principal.profile_complete = complete;
            self.cache.save(&SessionRecord {
                token: session.token.clone(),
                principal: session.principal.clone(),
                issued_at: session.issued_at,
            });
        }

        self.session
            .as_ref()
            .ok_or_else(|| ApiError::Auth("no active session".to_string()))
    }

    /// Clear token and principal unconditionally. Idempotent; never fails.
    pub fn logout(&mut self) {
        if self.session.is_some() {
            info!("logging out");
        }
        self.session = None;
        self.cache.clear();
    }

    /// Escalation path for a 401 or mid-flight token expiry on any request.
    pub fn expire(&mut self) -> Route {
        warn!("token rejected by the server; clearing session");
        self.logout();
        Route::Login
    }

    /// Re-adopt a persisted session on startup, if one survived.
    pub fn restore(&mut self) {
        if self.session.is_some() {
            return;
        }
        if let Some(record) = self.cache.load() {
            info!("restored persisted session for {}", record.principal.email);
            self.session = Some(Session {
                principal: record.principal,
                token: record.token,
                issued_at: record.issued_at,
            });
        }
    }
}
