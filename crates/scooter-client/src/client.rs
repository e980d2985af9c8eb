// scooter-client/src/client.rs
// ============================================================================
// Module: HTTP Client Wrapper
// Description: JSON HTTP client for the scooter-rental service contract.
// Purpose: Issue courier and order calls with transcripts, without retries.
// Dependencies: reqwest, serde, serde_json, url
// ============================================================================

//! ## Overview
//! The wrapper is a pure pass-through: it serializes payloads locally,
//! sends one request per operation, and hands the decoded status/body back
//! for the assertion layer to inspect. Remote validation statuses are never
//! interpreted here and nothing is retried.
//! Invariants:
//! - Every request carries `Content-Type: application/json`.
//! - A serialization failure is a local error, distinct from any HTTP
//!   outcome.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::ApiError;
use crate::models::Courier;
use crate::models::Order;
use crate::response::ApiResponse;

/// Production base URL of the scooter-rental service.
pub const DEFAULT_BASE_URL: &str = "https://qa-scooter.praktikum-services.ru";

/// Canonical courier resource base.
const COURIER_PATH: &str = "/api/v1/courier";
/// Canonical order resource base.
const ORDERS_PATH: &str = "/api/v1/orders";

/// One request/response pair captured by the client.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// 1-based position of the call within the client's lifetime.
    pub sequence: u64,
    /// HTTP method of the call.
    pub method: String,
    /// Request path relative to the base URL.
    pub path: String,
    /// Serialized request payload; `Null` for body-less calls.
    pub request: Value,
    /// HTTP status of the response.
    pub status: u16,
    /// Decoded response body.
    pub response: Value,
}

/// HTTP client for the scooter service with transcript capture.
#[derive(Debug, Clone)]
pub struct ScooterClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// Underlying HTTP client with an explicit timeout.
    client: Client,
    /// Captured request/response pairs, shared across clones.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl ScooterClient {
    /// Creates a client for a base URL with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] for unparseable URLs and
    /// [`ApiError::Transport`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the captured transcript.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Registers a courier account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for local failures only; remote validation
    /// statuses travel inside the response.
    pub async fn create_courier(&self, courier: &Courier) -> Result<ApiResponse, ApiError> {
        self.post(COURIER_PATH, courier).await
    }

    /// Logs a courier in; a 200 response carries the account `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for local failures only.
    pub async fn login_courier(&self, courier: &Courier) -> Result<ApiResponse, ApiError> {
        let path = format!("{COURIER_PATH}/login");
        self.post(&path, courier).await
    }

    /// Deletes a courier account by id. Callers treat this as best-effort
    /// and do not assert the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for local failures only.
    pub async fn delete_courier(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let path = format!("{COURIER_PATH}/{id}");
        self.send(Method::DELETE, &path, None).await
    }

    /// Creates a delivery order; a 201 response carries a `track` value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for local failures only.
    pub async fn create_order(&self, order: &Order) -> Result<ApiResponse, ApiError> {
        self.post(ORDERS_PATH, order).await
    }

    /// Lists orders; a 200 response carries a non-null `orders` field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for local failures only.
    pub async fn get_orders(&self) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, ORDERS_PATH, None).await
    }

    /// Serializes a payload locally and posts it.
    async fn post<T: Serialize>(&self, path: &str, payload: &T) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_value(payload).map_err(ApiError::Serialize)?;
        self.send(Method::POST, path, Some(body)).await
    }

    /// Issues one request and decodes the response. No retries.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request =
            self.client.request(method.clone(), &url).header(CONTENT_TYPE, "application/json");
        if let Some(payload) = &body {
            request = request.body(serde_json::to_vec(payload).map_err(ApiError::Serialize)?);
        }
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let decoded = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
                path: path.to_string(),
                status: status.as_u16(),
                source,
            })?
        };
        self.record(
            method.as_str(),
            path,
            body.unwrap_or(Value::Null),
            status.as_u16(),
            decoded.clone(),
        );
        Ok(ApiResponse::new(status, decoded))
    }

    /// Appends a transcript entry; a poisoned lock drops the entry.
    fn record(&self, method: &str, path: &str, request: Value, status: u16, response: Value) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(TranscriptEntry {
            sequence,
            method: method.to_string(),
            path: path.to_string(),
            request,
            status,
            response,
        });
    }
}
