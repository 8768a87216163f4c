use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::ErrorKind;

/// One error or warning reported by the service for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: i32,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    #[serde(default)]
    pub request_uuid: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, code: i32, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            kind,
            request_uuid: String::new(),
        }
    }

    pub fn with_request_uuid(mut self, request_uuid: impl Into<String>) -> Self {
        self.request_uuid = request_uuid.into();
        self
    }

    /// Rendering used when several records are joined into one string; the
    /// shared request uuid is appended once at the end instead.
    pub fn without_uuid(&self) -> String {
        format!(
            "type: {} code: {} message: {}",
            self.kind, self.code, self.message
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    pub fn is_warning(&self) -> bool {
        self.kind.is_warning()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {} code: {} message: {}, request uuid: {}",
            self.kind, self.code, self.message, self.request_uuid
        )
    }
}

impl std::error::Error for ApiError {}

/// Ordered list of records returned for one request.
///
/// All members are assumed, not enforced, to share a request uuid; the
/// rendered form reports the last member's uuid when they disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiErrors(pub Vec<ApiError>);

impl ApiErrors {
    pub fn new(errors: Vec<ApiError>) -> Self {
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ApiError> {
        self.0.iter()
    }

    /// Members that count as errors, in order; warnings are skipped.
    pub fn errors(&self) -> Vec<&ApiError> {
        self.0.iter().filter(|e| e.is_error()).collect()
    }

    /// Members that are warnings, in order.
    pub fn warnings(&self) -> Vec<&ApiError> {
        self.0.iter().filter(|e| e.is_warning()).collect()
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ApiError::without_uuid).collect();
        let uuid = self
            .0
            .last()
            .map(|e| e.request_uuid.as_str())
            .unwrap_or_default();
        write!(f, "{}; request uuid: {}", rendered.join("; "), uuid)
    }
}

impl std::error::Error for ApiErrors {}

impl From<Vec<ApiError>> for ApiErrors {
    fn from(errors: Vec<ApiError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ApiErrors {
    type Item = ApiError;
    type IntoIter = std::vec::IntoIter<ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ApiErrors {
    type Item = &'a ApiError;
    type IntoIter = std::slice::Iter<'a, ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
