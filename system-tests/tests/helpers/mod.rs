// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for scooter contract tests.
// Purpose: Provide the service stub, cleanup guards, and artifact utilities.
// Dependencies: system-tests, scooter-client
// ============================================================================

//! ## Overview
//! Shared helpers for scooter contract tests.
//! Invariants:
//! - Scenario execution is linear: arrange, act, assert, then teardown.
//! - Couriers created during a scenario are always released, even on
//!   assertion failure.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod guard;
