// scooter-client/src/models.rs
// ============================================================================
// Module: Domain Models
// Description: Wire types for courier accounts and scooter orders.
// Purpose: Serialize request payloads exactly as the service contract expects.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Typed request payloads for the two domain entities the contract suites
//! exercise. Construction is pure; all field validation is delegated to the
//! remote service, so even deliberately invalid values are representable.

use serde::Deserialize;
use serde::Serialize;

/// Courier account payload for registration and login calls.
///
/// # Invariants
/// - `login` must be unique on the remote service for creation to succeed;
///   the uniqueness is asserted by scenarios, never enforced locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    /// Account login, unique per account on the remote service.
    pub login: String,
    /// Account password.
    pub password: String,
    /// Optional display name; omitted from the wire form when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

impl Courier {
    /// Creates a fully populated courier.
    #[must_use]
    pub fn new(login: &str, password: &str, first_name: &str) -> Self {
        Self {
            login: login.to_string(),
            password: password.to_string(),
            first_name: Some(first_name.to_string()),
        }
    }

    /// Creates a courier carrying only credentials.
    #[must_use]
    pub fn credentials(login: &str, password: &str) -> Self {
        Self {
            login: login.to_string(),
            password: password.to_string(),
            first_name: None,
        }
    }

    /// Creates the empty-field negative fixture used by missing-data
    /// scenarios.
    #[must_use]
    pub fn empty() -> Self {
        Self::credentials("", "")
    }

    /// Returns a copy of this courier with a replaced password.
    #[must_use]
    pub fn with_password(&self, password: &str) -> Self {
        Self {
            login: self.login.clone(),
            password: password.to_string(),
            first_name: self.first_name.clone(),
        }
    }
}

/// Scooter color options accepted by the order endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    /// Black scooter.
    Black,
    /// Grey scooter.
    Grey,
}

/// Delivery-order payload for the order endpoints.
///
/// # Invariants
/// - `color` carries zero, one, or two entries; the service treats the set
///   as order-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Recipient first name.
    pub first_name: String,
    /// Recipient last name.
    pub last_name: String,
    /// Delivery address.
    pub address: String,
    /// Nearest metro station.
    pub metro_station: String,
    /// Contact phone number.
    pub phone: String,
    /// Rental duration in days.
    pub rent_time: u32,
    /// Delivery date string, as the service expects it.
    pub delivery_date: String,
    /// Free-form courier comment.
    pub comment: String,
    /// Requested scooter colors.
    pub color: Vec<Color>,
}
