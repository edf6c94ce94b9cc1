use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use super::request::HeaderVec;

/// The write side of one request.
///
/// A response starts open and is finalized by the first call to
/// [`send_json`](Self::send_json). The dispatcher checks
/// [`is_ended`](Self::is_ended) between handlers to decide whether to keep
/// going, so finalizing early is how a handler short-circuits the rest of its
/// chain. Writes after finalization are dropped.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderVec,
    body: Value,
    ended: bool,
}

impl Default for ApiResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiResponse {
    /// Create an open response.
    #[must_use]
    pub fn new() -> Self {
        ApiResponse {
            status: 200,
            headers: HeaderVec::new(),
            body: Value::Null,
            ended: false,
        }
    }

    /// Whether the response has been finalized.
    #[inline]
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// The status code (meaningful once finalized).
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The JSON body (meaningful once finalized).
    #[must_use]
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderVec {
        &self.headers
    }

    /// Get a header by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or replace a header (case-insensitive on the name).
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
    }

    /// Write the status code and JSON body, finalizing the response.
    ///
    /// The first write wins; later calls are logged and dropped so that a
    /// request never carries more than one logical response.
    pub fn send_json(&mut self, status: u16, body: Value) {
        if self.ended {
            warn!(
                dropped_status = status,
                committed_status = self.status,
                "response already finalized, dropping write"
            );
            return;
        }
        self.set_header("content-type", "application/json".to_string());
        self.status = status;
        self.body = body;
        self.ended = true;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_json_finalizes() {
        let mut res = ApiResponse::new();
        assert!(!res.is_ended());
        res.send_json(201, json!({ "id": 7 }));
        assert!(res.is_ended());
        assert_eq!(res.status(), 201);
        assert_eq!(res.body(), &json!({ "id": 7 }));
        assert_eq!(res.get_header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_first_write_wins() {
        let mut res = ApiResponse::new();
        res.send_json(200, json!({ "ok": true }));
        res.send_json(500, json!({ "message": "late" }));
        assert_eq!(res.status(), 200);
        assert_eq!(res.body(), &json!({ "ok": true }));
    }

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut res = ApiResponse::new();
        res.set_header("X-Trace", "one".to_string());
        res.set_header("x-trace", "two".to_string());
        assert_eq!(res.get_header("X-Trace"), Some("two"));
        assert_eq!(res.headers().len(), 1);
    }
}
