use tracing::debug;

use ridelink_domain::identity::Session;
use ridelink_session::guard::{decide, Decision};
use ridelink_session::routes::Route;

/// Applies guard decisions on every navigation. Public routes are not
/// guarded; guarded routes chase redirects until one admits.
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Resolve a navigation against the current session. The decision is
    /// computed fresh each time; redirect chains converge in at most two
    /// hops (dashboard, then profile setup).
    pub fn navigate(&mut self, session: Option<&Session>, target: Route) -> Route {
        let mut resolved = target;
        for _ in 0..4 {
            if resolved.is_public() {
                break;
            }
            match decide(session, resolved.required_roles(), resolved) {
                Decision::Allow => break,
                Decision::ToLogin => resolved = Route::Login,
                Decision::ToProfileSetup(route) => resolved = route,
                Decision::ToOwnDashboard(route) => resolved = route,
            }
        }
        if resolved != target {
            debug!("navigation to {} redirected to {}", target.path(), resolved.path());
        }
        self.current = resolved;
        resolved
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
