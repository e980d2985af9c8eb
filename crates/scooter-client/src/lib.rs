// scooter-client/src/lib.rs
// ============================================================================
// Module: Scooter Client Library
// Description: Test client and verification contracts for the scooter API.
// Purpose: Provide typed request builders, an HTTP wrapper, and assertions.
// Dependencies: reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! This crate hosts the reusable contract-test plumbing for the scooter
//! rental service: domain wire types, an HTTP client wrapper with transcript
//! capture, a JSON-path response handle, and a chainable assertion layer.
//! Invariants:
//! - The client never retries and never interprets remote statuses.
//! - Remote validation outcomes (400/404/409) are data, not errors.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod check;
pub mod client;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod response;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use check::ContractError;
pub use check::Expect;
pub use check::expect;
pub use client::DEFAULT_BASE_URL;
pub use client::ScooterClient;
pub use client::TranscriptEntry;
pub use error::ApiError;
pub use fixtures::ClockLoginGenerator;
pub use fixtures::LoginGenerator;
pub use fixtures::SequenceLoginGenerator;
pub use fixtures::sample_order;
pub use fixtures::unique_courier;
pub use models::Color;
pub use models::Courier;
pub use models::Order;
pub use reqwest::StatusCode;
pub use response::ApiResponse;
