use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::ValidationErrors;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub license_no: String,
    pub cab: Option<Cab>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cab {
    pub id: Uuid,
    pub registration_no: String,
    pub model: String,
    pub seat_count: i32,
    pub available: bool,
}

/// Registration payload for POST /signup/customer. Registration never
/// authenticates; login is a separate explicit step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSignup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
}

impl CustomerSignup {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = required_account_fields(&self.name, &self.email, &self.password);
        if self.mobile.trim().is_empty() {
            errors.add("mobile", "is required");
        }
        errors.into_result()
    }
}

/// Registration payload for POST /signup/driver. Drivers additionally
/// register their license and vehicle up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverSignup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
    pub license_no: String,
    pub cab: CabForm,
}

impl DriverSignup {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = required_account_fields(&self.name, &self.email, &self.password);
        if self.mobile.trim().is_empty() {
            errors.add("mobile", "is required");
        }
        if self.license_no.trim().is_empty() {
            errors.add("license_no", "is required");
        }
        if self.cab.registration_no.trim().is_empty() {
            errors.add("cab.registration_no", "is required");
        }
        if self.cab.model.trim().is_empty() {
            errors.add("cab.model", "is required");
        }
        errors.into_result()
    }
}

/// Vehicle fields as entered at registration or profile setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabForm {
    pub registration_no: String,
    pub model: String,
    pub seat_count: i32,
}

/// Profile-setup payload for customers; creating the profile is what flips
/// the account to profile-complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfileForm {
    pub name: String,
    pub mobile: String,
}

/// Profile-setup payload for drivers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverProfileForm {
    pub name: String,
    pub mobile: String,
    pub license_no: String,
    pub cab: CabForm,
}

fn required_account_fields(name: &str, email: &str, password: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if name.trim().is_empty() {
        errors.add("name", "is required");
    }
    if email.trim().is_empty() || !email.contains('@') {
        errors.add("email", "must be a valid email address");
    }
    if password.is_empty() {
        errors.add("password", "is required");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_signup_requires_email_shape() {
        let signup = CustomerSignup {
            name: "Asha Rao".to_string(),
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
            mobile: "5550100".to_string(),
        };
        let errors = signup.validate().unwrap_err();
        assert!(errors.get("email").is_some());
    }

    #[test]
    fn test_driver_signup_requires_vehicle_fields() {
        let signup = DriverSignup {
            name: "Dev Kumar".to_string(),
            email: "dev@example.com".to_string(),
            password: "secret".to_string(),
            mobile: "5550101".to_string(),
            license_no: String::new(),
            cab: CabForm {
                registration_no: String::new(),
                model: "Sedan".to_string(),
                seat_count: 4,
            },
        };
        let errors = signup.validate().unwrap_err();
        assert!(errors.get("license_no").is_some());
        assert!(errors.get("cab.registration_no").is_some());
        assert!(errors.get("cab.model").is_none());
    }
}
