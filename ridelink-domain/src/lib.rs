pub mod booking;
pub mod identity;
pub mod profile;
pub mod validation;

pub use booking::{Booking, BookingInput, BookingStatus};
pub use identity::{AccountInfo, LoginResponse, Principal, Role, Session};
pub use profile::{
    Cab, CabForm, CustomerProfile, CustomerProfileForm, CustomerSignup, DriverProfile,
    DriverProfileForm, DriverSignup,
};
pub use validation::ValidationErrors;
