//! # Client Module
//!
//! A blocking JSON client for routes served by this crate's dispatchers.
//!
//! Paths use `[param]` placeholders; parameters that match a placeholder are
//! substituted into the path, the rest become a URL-encoded query string in
//! the order given:
//!
//! ```
//! use chainroute::client::build_url;
//!
//! assert_eq!(build_url("/api/sample/[id]", &[("id", "1")]), "/api/sample/1");
//! assert_eq!(
//!     build_url("/api/sample/", &[("id", "1"), ("foo", "bar")]),
//!     "/api/sample/?id=1&foo=bar"
//! );
//! ```
//!
//! Every request carries `Content-Type: application/json`; bodies are
//! serialized with `serde_json` and responses parsed back into
//! [`serde_json::Value`].

use anyhow::Context;
use http::Method;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::runtime_config::RuntimeConfig;

/// Status and parsed JSON body of one client call.
#[derive(Debug, Clone)]
pub struct ClientResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body; `Null` for an empty body, the raw text as a JSON
    /// string if the body was not valid JSON
    pub body: Value,
}

impl ClientResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking JSON client bound to a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Build a client. The request timeout comes from
    /// `CHAINROUTE_HTTP_TIMEOUT_MS` (default 30s).
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let base = Url::parse(base).with_context(|| format!("invalid base url: {base}"))?;
        let http = reqwest::blocking::Client::builder()
            .timeout(RuntimeConfig::from_env().http_timeout)
            .build()
            .context("failed to build http client")?;
        Ok(ApiClient { base, http })
    }

    /// GET a templated path.
    pub fn get(&self, path: &str, params: &[(&str, &str)]) -> anyhow::Result<ClientResponse> {
        self.request(Method::GET, path, params, None)
    }

    /// POST a JSON body to a templated path.
    pub fn post(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> anyhow::Result<ClientResponse> {
        self.request(Method::POST, path, params, body)
    }

    /// PUT a JSON body to a templated path.
    pub fn put(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> anyhow::Result<ClientResponse> {
        self.request(Method::PUT, path, params, body)
    }

    /// DELETE a templated path.
    pub fn delete(&self, path: &str, params: &[(&str, &str)]) -> anyhow::Result<ClientResponse> {
        self.request(Method::DELETE, path, params, None)
    }

    /// PATCH a JSON body to a templated path.
    pub fn patch(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> anyhow::Result<ClientResponse> {
        self.request(Method::PATCH, path, params, body)
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> anyhow::Result<ClientResponse> {
        let relative = build_url(path, params);
        let target = self
            .base
            .join(&relative)
            .with_context(|| format!("invalid request path: {relative}"))?;
        debug!(method = %method, url = %target, "sending request");
        let mut builder = self
            .http
            .request(method, target)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().context("request failed")?;
        let status = response.status().as_u16();
        let text = response.text().unwrap_or_default();
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(ClientResponse { status, body })
    }
}

/// Substitute `[param]` placeholders in `path` and append the remaining
/// parameters as a query string, preserving their order.
#[must_use]
pub fn build_url(path: &str, params: &[(&str, &str)]) -> String {
    let mut used = vec![false; params.len()];
    let segments: Vec<String> = path
        .split('/')
        .map(|segment| {
            if segment.len() > 2 && segment.starts_with('[') && segment.ends_with(']') {
                let name = &segment[1..segment.len() - 1];
                if let Some(idx) = params.iter().position(|(k, _)| *k == name) {
                    used[idx] = true;
                    return urlencoding::encode(params[idx].1).into_owned();
                }
            }
            segment.to_string()
        })
        .collect();
    let mut url = segments.join("/");
    let query: Vec<String> = params
        .iter()
        .zip(&used)
        .filter(|(_, consumed)| !**consumed)
        .map(|((k, v), _)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}
