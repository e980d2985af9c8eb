// system-tests/tests/helpers/guard.rs
// ============================================================================
// Module: Courier Cleanup Guard
// Description: Scoped cleanup for couriers created during a scenario.
// Purpose: Guarantee best-effort deletion on every exit path.
// Dependencies: scooter-client, tokio
// ============================================================================

//! ## Overview
//! A guard captures the courier id a scenario obtained and deletes the
//! account when the guard drops, including on assertion failure or panic.
//! Deletion is best-effort: outcomes are never asserted and transport
//! failures during cleanup are swallowed.

use std::thread;

use scooter_client::ApiResponse;
use scooter_client::ScooterClient;
use serde_json::Value;
use tokio::runtime::Builder;

/// Extracts a courier id from a login response body.
pub fn courier_id(response: &ApiResponse) -> Option<String> {
    response.path("id").map(|value| match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

/// Scoped cleanup for one courier account.
pub struct CourierGuard {
    /// Client used for the cleanup delete.
    client: ScooterClient,
    /// Captured courier id, if the scenario obtained one.
    id: Option<String>,
}

impl CourierGuard {
    /// Creates a disarmed guard bound to a client.
    pub fn new(client: &ScooterClient) -> Self {
        Self {
            client: client.clone(),
            id: None,
        }
    }

    /// Arms the guard with an explicit courier id.
    pub fn capture(&mut self, id: String) {
        self.id = Some(id);
    }

    /// Arms the guard from a login response carrying an `id` field.
    /// Responses without an id leave the guard unchanged.
    pub fn capture_from(&mut self, response: &ApiResponse) {
        if let Some(id) = courier_id(response) {
            self.id = Some(id);
        }
    }
}

impl Drop for CourierGuard {
    fn drop(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        let client = self.client.clone();
        // The delete runs on its own runtime so cleanup also works when the
        // scenario's runtime is already unwinding.
        let join = thread::spawn(move || {
            let Ok(runtime) = Builder::new_current_thread().enable_all().build() else {
                return;
            };
            runtime.block_on(async move {
                let _ = client.delete_courier(&id).await;
            });
        });
        let _ = join.join();
    }
}
