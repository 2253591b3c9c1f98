use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, warn};

use ridelink_booking::{BookingError, CustomerBooking, DriverBooking};
use ridelink_client::{Config, FileTokenCache, HttpApi};
use ridelink_core::api::{AuthApi, CustomerBookingApi, DriverBookingApi, ProfileApi};
use ridelink_core::signal::HistoryRefresh;
use ridelink_core::token::{InMemoryTokenCache, TokenCache};
use ridelink_core::{ApiError, ApiResult};
use ridelink_domain::ValidationErrors;
use ridelink_session::routes::Route;
use ridelink_session::store::SessionStore;

use crate::feedback::FeedbackChannel;
use crate::nav::Navigator;

/// Everything one running portal owns: the session store, the two booking
/// controllers, navigation and the feedback surface. Collaborators come in
/// through the seam traits so tests substitute fakes without global state.
pub struct Portal {
    pub session: SessionStore,
    pub customer_booking: CustomerBooking,
    pub driver_booking: DriverBooking,
    pub feedback: FeedbackChannel,
    pub nav: Navigator,
    refresh_tx: broadcast::Sender<HistoryRefresh>,
}

impl Portal {
    pub fn new(
        auth: Arc<dyn AuthApi>,
        profile: Arc<dyn ProfileApi>,
        customer_api: Arc<dyn CustomerBookingApi>,
        driver_api: Arc<dyn DriverBookingApi>,
        cache: Arc<dyn TokenCache>,
    ) -> Self {
        let (refresh_tx, _) = broadcast::channel(16);

        let mut session = SessionStore::new(auth, profile, cache);
        session.restore();

        Self {
            session,
            customer_booking: CustomerBooking::new(customer_api, refresh_tx.clone()),
            driver_booking: DriverBooking::new(driver_api, refresh_tx.clone()),
            feedback: FeedbackChannel::default(),
            nav: Navigator::new(),
            refresh_tx,
        }
    }

    /// Wire a portal against the real REST backend described by `config`.
    pub fn connect(config: &Config) -> ApiResult<Self> {
        let cache: Arc<dyn TokenCache> = match &config.session.token_file {
            Some(path) => Arc::new(FileTokenCache::new(path)),
            None => Arc::new(InMemoryTokenCache::new()),
        };
        let api = Arc::new(HttpApi::new(&config.api, cache.clone())?);
        Ok(Self::new(
            api.clone(),
            api.clone(),
            api.clone(),
            api,
            cache,
        ))
    }

    /// History screens subscribe here and refetch on every signal.
    pub fn subscribe_history_refresh(&self) -> broadcast::Receiver<HistoryRefresh> {
        self.refresh_tx.subscribe()
    }

    /// Guard-checked navigation against the live session state.
    pub fn navigate(&mut self, target: Route) -> Route {
        self.nav.navigate(self.session.session(), target)
    }

    /// The propagation policy in one place: validation goes back to the
    /// form, auth escalates to logout, the rest lands on the feedback
    /// surface.
    pub fn dispatch(&mut self, err: ApiError) -> Option<ValidationErrors> {
        match err {
            ApiError::Validation(errors) => Some(errors),
            ApiError::Auth(message) => {
                warn!("auth failure escalated to logout: {}", message);
                let target = self.session.expire();
                self.nav.navigate(None, target);
                self.feedback
                    .error("Your session has expired. Please log in again.");
                None
            }
            ApiError::NotFound(message) => {
                self.feedback.error(message);
                None
            }
            ApiError::Network(message) => {
                self.feedback.error(message);
                None
            }
        }
    }

    /// Same policy for controller errors. An in-flight rejection is
    /// dropped silently: the first transition's outcome is authoritative.
    pub fn dispatch_booking(&mut self, err: BookingError) -> Option<ValidationErrors> {
        match err {
            BookingError::Validation(errors) => Some(errors),
            BookingError::TransitionInFlight => {
                debug!("transition ignored while another is in flight");
                None
            }
            BookingError::InvalidTransition { .. } => {
                self.feedback.error(err.to_string());
                None
            }
            BookingError::Api(err) => self.dispatch(err),
        }
    }
}
