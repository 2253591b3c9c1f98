use ridelink_domain::identity::Role;

/// Navigable screens of the portal. Public routes carry no required roles;
/// everything else names the single role that may enter it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    CustomerDashboard,
    CustomerProfileSetup,
    CustomerHistory,
    DriverDashboard,
    DriverProfileSetup,
    AdminDashboard,
    AdminCustomers,
    AdminDrivers,
    AdminCabs,
    AdminBookings,
}

const CUSTOMER_ONLY: &[Role] = &[Role::Customer];
const DRIVER_ONLY: &[Role] = &[Role::Driver];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::CustomerDashboard => "/customer/dashboard",
            Route::CustomerProfileSetup => "/customer/profile",
            Route::CustomerHistory => "/customer/history",
            Route::DriverDashboard => "/driver/dashboard",
            Route::DriverProfileSetup => "/driver/profile",
            Route::AdminDashboard => "/admin/dashboard",
            Route::AdminCustomers => "/admin/customers",
            Route::AdminDrivers => "/admin/drivers",
            Route::AdminCabs => "/admin/cabs",
            Route::AdminBookings => "/admin/bookings",
        }
    }

    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            Route::Home | Route::Login | Route::Register => &[],
            Route::CustomerDashboard | Route::CustomerProfileSetup | Route::CustomerHistory => {
                CUSTOMER_ONLY
            }
            Route::DriverDashboard | Route::DriverProfileSetup => DRIVER_ONLY,
            Route::AdminDashboard
            | Route::AdminCustomers
            | Route::AdminDrivers
            | Route::AdminCabs
            | Route::AdminBookings => ADMIN_ONLY,
        }
    }

    /// Role to default-route mapping, shared by login redirect and the
    /// guard. An unknown role lands on the home page.
    pub fn dashboard_for(role: Option<Role>) -> Route {
        match role {
            Some(Role::Admin) => Route::AdminDashboard,
            Some(Role::Driver) => Route::DriverDashboard,
            Some(Role::Customer) => Route::CustomerDashboard,
            None => Route::Home,
        }
    }

    /// Profile-setup route for roles that have one. Admins have no
    /// profile-completion step.
    pub fn profile_setup_for(role: Role) -> Option<Route> {
        match role {
            Role::Customer => Some(Route::CustomerProfileSetup),
            Role::Driver => Some(Route::DriverProfileSetup),
            Role::Admin => None,
        }
    }

    pub fn is_public(&self) -> bool {
        self.required_roles().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_mapping() {
        assert_eq!(
            Route::dashboard_for(Some(Role::Admin)),
            Route::AdminDashboard
        );
        assert_eq!(
            Route::dashboard_for(Some(Role::Driver)),
            Route::DriverDashboard
        );
        assert_eq!(
            Route::dashboard_for(Some(Role::Customer)),
            Route::CustomerDashboard
        );
        assert_eq!(Route::dashboard_for(None), Route::Home);
    }

    #[test]
    fn test_public_routes_have_no_required_roles() {
        assert!(Route::Home.is_public());
        assert!(Route::Login.is_public());
        assert!(Route::Register.is_public());
        assert!(!Route::CustomerDashboard.is_public());
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::AdminDashboard.path(), "/admin/dashboard");
        assert_eq!(Route::CustomerProfileSetup.path(), "/customer/profile");
    }
}
