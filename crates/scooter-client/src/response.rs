// scooter-client/src/response.rs
// ============================================================================
// Module: Response Handle
// Description: Status and JSON body of a completed contract call.
// Purpose: Expose status codes and path-addressed body fields to assertions.
// Dependencies: reqwest, serde_json
// ============================================================================

//! ## Overview
//! A response handle is plain data: the HTTP status and the decoded JSON
//! body. Field access goes through a dotted-path lookup so scenarios can
//! reach nested values (`id`, `track`, `orders.0.track`) without redeclaring
//! response types per endpoint.

use reqwest::StatusCode;
use serde_json::Value;

/// Decoded response of a single contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status returned by the service.
    status: StatusCode,
    /// Decoded JSON body; `Null` when the body was empty.
    body: Value,
}

impl ApiResponse {
    /// Creates a response handle from a status and decoded body.
    #[must_use]
    pub const fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
        }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the decoded JSON body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Looks up a body field by dotted path.
    ///
    /// Segments index objects by key and arrays by decimal position.
    /// Returns `None` when any segment is absent or the shape mismatches.
    #[must_use]
    pub fn path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.body, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
            _ => None,
        })
    }
}
