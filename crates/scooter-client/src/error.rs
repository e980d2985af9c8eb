// scooter-client/src/error.rs
// ============================================================================
// Module: Client Error Taxonomy
// Description: Local failure modes of the contract-test client.
// Purpose: Keep transport and construction errors distinct from remote
//          validation outcomes, which travel inside responses.
// Dependencies: reqwest, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! Only failures local to the harness surface as [`ApiError`]: transport
//! breakdowns, payload serialization, and undecodable response bodies.
//! Remote 4xx statuses are expected contract data and never appear here.

/// Local failures raised by [`crate::client::ScooterClient`].
///
/// # Invariants
/// - Variants classify spec taxonomy (b) and (c); remote validation errors
///   (taxonomy (a)) are returned as [`crate::response::ApiResponse`] values.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("invalid base url {url}: {source}")]
    InvalidBaseUrl {
        /// The rejected URL text.
        url: String,
        /// Parse failure detail.
        #[source]
        source: url::ParseError,
    },
    /// Connection, timeout, or other transport-level failure.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// A request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    /// A non-empty response body was not valid JSON.
    #[error("response body for {path} is not valid json (status {status}): {source}")]
    Decode {
        /// Request path whose response failed to decode.
        path: String,
        /// HTTP status of the undecodable response.
        status: u16,
        /// Decode failure detail.
        #[source]
        source: serde_json::Error,
    },
}
