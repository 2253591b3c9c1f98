use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::ValidationErrors;

/// Booking status in the lifecycle. BOOKED and IN_PROGRESS are the only
/// non-terminal values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Booked,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Label shown to end users. IN_PROGRESS renders as ACTIVE; no other
    /// status is remapped.
    pub fn display(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "BOOKED",
            BookingStatus::InProgress => "ACTIVE",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "BOOKED",
            BookingStatus::InProgress => "IN_PROGRESS",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

/// A trip booking. For a given customer, and independently for a given
/// driver/cab, at most one booking may be non-terminal at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub cab_id: Option<Uuid>,
    pub status: BookingStatus,
    pub pickup: String,
    pub destination: String,
    pub trip_distance_km: f64,
    pub fare_amount: i32,
    pub fare_currency: String,
    pub booked_at: DateTime<Utc>,
    pub last_update_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}

const PLACE_MIN_LEN: usize = 3;
const PLACE_MAX_LEN: usize = 50;
const MAX_DISTANCE_KM: f64 = 1000.0;

/// Customer-entered fields of a booking. Validated locally before any
/// network call, matching the server's constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingInput {
    pub pickup: String,
    pub destination: String,
    pub trip_distance_km: f64,
}

impl BookingInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(message) = check_place(&self.pickup) {
            errors.add("pickup", message);
        }
        if let Some(message) = check_place(&self.destination) {
            errors.add("destination", message);
        }
        if !self.trip_distance_km.is_finite() || self.trip_distance_km <= 0.0 {
            errors.add("trip_distance_km", "must be greater than 0");
        } else if self.trip_distance_km > MAX_DISTANCE_KM {
            errors.add("trip_distance_km", "must not exceed max 1000 km");
        }

        errors.into_result()
    }
}

fn check_place(value: &str) -> Option<&'static str> {
    if value.len() < PLACE_MIN_LEN || value.len() > PLACE_MAX_LEN {
        return Some("length must be 3 to 50 characters");
    }
    // Allowed charset: letters, digits, comma, hyphen, space
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ',' | '-' | ' '));
    if !allowed {
        return Some("contains characters outside A-Za-z0-9,- and space");
    }
    None
}
