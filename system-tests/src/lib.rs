// system-tests/src/lib.rs
// ============================================================================
// Module: Scooter System Tests Library
// Description: Shared configuration for scooter contract-test scenarios.
// Purpose: Provide common utilities for the system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration utilities used by the scooter
//! contract-test binaries in `system-tests/tests`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
