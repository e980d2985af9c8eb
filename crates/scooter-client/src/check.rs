// scooter-client/src/check.rs
// ============================================================================
// Module: Assertion Layer
// Description: Response verification contracts for scenario code.
// Purpose: Succeed silently or fail with the exact diverging field/status.
// Dependencies: reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Assertions are chainable through `?`: each check consumes and returns the
//! [`Expect`] wrapper so a scenario reads as one verification sentence.
//! Failures carry the observed body so a mismatch report identifies what the
//! service actually said.

use reqwest::StatusCode;
use serde_json::Value;

use crate::response::ApiResponse;

/// Verification failure naming the diverging status or field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// The HTTP status differed from the expectation.
    #[error("expected status {expected}, got {actual}; body: {body}")]
    StatusMismatch {
        /// Expected status code.
        expected: u16,
        /// Observed status code.
        actual: u16,
        /// Observed response body.
        body: Value,
    },
    /// A required body field was absent.
    #[error("field `{path}` missing from response body: {body}")]
    MissingField {
        /// Dotted path of the absent field.
        path: String,
        /// Observed response body.
        body: Value,
    },
    /// A required body field was present but null.
    #[error("field `{path}` is null in response body: {body}")]
    NullField {
        /// Dotted path of the null field.
        path: String,
        /// Observed response body.
        body: Value,
    },
    /// A body field held an unexpected value.
    #[error("field `{path}` expected {expected}, got {actual}")]
    FieldMismatch {
        /// Dotted path of the diverging field.
        path: String,
        /// Expected field value.
        expected: Value,
        /// Observed field value.
        actual: Value,
    },
}

/// Chainable expectation over one response.
#[derive(Debug, Clone, Copy)]
pub struct Expect<'a> {
    /// Response under verification.
    response: &'a ApiResponse,
}

/// Starts a verification chain over a response.
#[must_use]
pub const fn expect(response: &ApiResponse) -> Expect<'_> {
    Expect {
        response,
    }
}

impl Expect<'_> {
    /// Asserts the exact HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::StatusMismatch`] when the status differs.
    pub fn status(self, expected: StatusCode) -> Result<Self, ContractError> {
        let actual = self.response.status();
        if actual == expected {
            return Ok(self);
        }
        Err(ContractError::StatusMismatch {
            expected: expected.as_u16(),
            actual: actual.as_u16(),
            body: self.response.body().clone(),
        })
    }

    /// Asserts exact equality of a body field.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::MissingField`] when the path is absent and
    /// [`ContractError::FieldMismatch`] when the value differs.
    pub fn field_eq(self, path: &str, expected: &Value) -> Result<Self, ContractError> {
        let Some(actual) = self.response.path(path) else {
            return Err(ContractError::MissingField {
                path: path.to_string(),
                body: self.response.body().clone(),
            });
        };
        if actual == expected {
            return Ok(self);
        }
        Err(ContractError::FieldMismatch {
            path: path.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
        })
    }

    /// Asserts a body field exists and is non-null.
    ///
    /// Used for generated fields (`id`, `track`, `orders`) whose values are
    /// opaque to the harness.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::MissingField`] or [`ContractError::NullField`]
    /// when the field is absent or null.
    pub fn field_present(self, path: &str) -> Result<Self, ContractError> {
        match self.response.path(path) {
            None => Err(ContractError::MissingField {
                path: path.to_string(),
                body: self.response.body().clone(),
            }),
            Some(Value::Null) => Err(ContractError::NullField {
                path: path.to_string(),
                body: self.response.body().clone(),
            }),
            Some(_) => Ok(self),
        }
    }
}
