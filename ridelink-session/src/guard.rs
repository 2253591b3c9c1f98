use ridelink_domain::identity::{Role, Session};

use crate::routes::Route;

/// Outcome of a navigation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    ToLogin,
    ToProfileSetup(Route),
    ToOwnDashboard(Route),
}

/// Pure admission decision for a guarded navigation. Re-evaluated on every
/// navigation and on every session change; the result is never cached.
///
/// Rules, in order: no session redirects to login; a role outside the
/// required set redirects to that role's own dashboard; a customer or
/// driver with an incomplete profile is sent to profile setup unless that
/// is already the target.
pub fn decide(session: Option<&Session>, required_roles: &[Role], target: Route) -> Decision {
    let session = match session {
        Some(session) => session,
        None => return Decision::ToLogin,
    };

    let role = session.principal.role;
    if !required_roles.is_empty() && !required_roles.contains(&role) {
        return Decision::ToOwnDashboard(Route::dashboard_for(Some(role)));
    }

    if !session.principal.profile_complete {
        if let Some(setup) = Route::profile_setup_for(role) {
            if target != setup {
                return Decision::ToProfileSetup(setup);
            }
        }
    }

    Decision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ridelink_domain::identity::Principal;
    use uuid::Uuid;

    fn session(role: Role, profile_complete: bool) -> Session {
        Session {
            principal: Principal {
                id: Uuid::new_v4(),
                email: "user@example.com".to_string(),
                role,
                profile_complete,
            },
            token: "tok".to_string(),
            issued_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_session_redirects_to_login() {
        let decision = decide(None, &[Role::Admin], Route::AdminDashboard);
        assert_eq!(decision, Decision::ToLogin);
    }

    #[test]
    fn test_wrong_role_redirects_to_own_dashboard() {
        let session = session(Role::Customer, true);
        let decision = decide(Some(&session), &[Role::Admin], Route::AdminDashboard);
        assert_eq!(
            decision,
            Decision::ToOwnDashboard(Route::CustomerDashboard)
        );
    }

    #[test]
    fn test_incomplete_profile_redirects_to_setup() {
        let session = session(Role::Driver, false);
        let decision = decide(Some(&session), &[Role::Driver], Route::DriverDashboard);
        assert_eq!(
            decision,
            Decision::ToProfileSetup(Route::DriverProfileSetup)
        );
    }

    #[test]
    fn test_profile_setup_route_itself_is_allowed() {
        let session = session(Role::Customer, false);
        let decision = decide(
            Some(&session),
            &[Role::Customer],
            Route::CustomerProfileSetup,
        );
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn test_admin_never_needs_profile_setup() {
        let session = session(Role::Admin, false);
        let decision = decide(Some(&session), &[Role::Admin], Route::AdminDashboard);
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn test_complete_profile_allows() {
        let session = session(Role::Customer, true);
        let decision = decide(Some(&session), &[Role::Customer], Route::CustomerDashboard);
        assert_eq!(decision, Decision::Allow);
    }
}
