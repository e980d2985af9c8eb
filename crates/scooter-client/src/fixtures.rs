// scooter-client/src/fixtures.rs
// ============================================================================
// Module: Fixture Builders
// Description: Unique-login generation and canned request payloads.
// Purpose: Provide deterministic, injectable fixture construction.
// Dependencies: std, serde-backed models
// ============================================================================

//! ## Overview
//! Scenario fixtures are randomized per run through an injectable login
//! generator so that concurrently running scenarios never collide on the
//! remote account table. The clock-backed generator matches production use;
//! the sequence generator keeps unit tests deterministic.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use crate::models::Color;
use crate::models::Courier;
use crate::models::Order;

/// Source of unique courier logins.
pub trait LoginGenerator {
    /// Returns the next login, distinct from previously issued ones.
    fn next_login(&self) -> String;
}

/// Clock-backed generator producing `<prefix>_<millis-since-epoch>` logins.
#[derive(Debug, Clone)]
pub struct ClockLoginGenerator {
    /// Login prefix, `courier` by default.
    prefix: String,
}

impl ClockLoginGenerator {
    /// Creates a generator with a custom prefix.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl Default for ClockLoginGenerator {
    fn default() -> Self {
        Self::with_prefix("courier")
    }
}

impl LoginGenerator for ClockLoginGenerator {
    fn next_login(&self) -> String {
        let millis =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        format!("{}_{millis}", self.prefix)
    }
}

/// Deterministic counter-backed generator for tests.
#[derive(Debug, Default)]
pub struct SequenceLoginGenerator {
    /// Issued-login counter.
    counter: AtomicU64,
}

impl LoginGenerator for SequenceLoginGenerator {
    fn next_login(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("courier_{next}")
    }
}

/// Builds the standard courier fixture with a freshly generated login.
#[must_use]
pub fn unique_courier(generator: &dyn LoginGenerator) -> Courier {
    Courier::new(&generator.next_login(), "1234", "Ваня")
}

/// Builds the standard order fixture with the requested colors.
#[must_use]
pub fn sample_order(color: Vec<Color>) -> Order {
    Order {
        first_name: "Ван".to_string(),
        last_name: "Ким".to_string(),
        address: "Москва".to_string(),
        metro_station: "Маяковская".to_string(),
        phone: "+79168887788".to_string(),
        rent_time: 1,
        delivery_date: "26.01.2025".to_string(),
        comment: "Комментарий".to_string(),
        color,
    }
}
