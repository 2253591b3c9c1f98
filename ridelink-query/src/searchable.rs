use ridelink_domain::booking::Booking;
use ridelink_domain::profile::{Cab, CustomerProfile, DriverProfile};

use crate::pipeline::Searchable;

impl Searchable for Booking {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.pickup,
            self.destination,
            self.status.display()
        )
    }
}

impl Searchable for CustomerProfile {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.mobile)
    }
}

impl Searchable for DriverProfile {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.license_no)
    }
}

impl Searchable for Cab {
    fn search_text(&self) -> String {
        format!("{} {}", self.registration_no, self.model)
    }
}
