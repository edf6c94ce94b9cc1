use http::{Extensions, Method};
use serde_json::Value;
use smallvec::SmallVec;
use std::sync::Arc;

/// Maximum query parameters held inline before spilling to the heap.
/// Most requests carry only a handful.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Maximum headers/cookies held inline before spilling to the heap.
pub const MAX_INLINE_HEADERS: usize = 16;

/// Stack-allocated parameter storage.
///
/// Names use `Arc<str>` so repeated keys clone in O(1); values stay `String`
/// since they are per-request data.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Stack-allocated header/cookie storage, same layout as [`ParamVec`] with a
/// larger inline capacity.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// Parsed request data passed to every handler in a chain.
///
/// The dispatcher treats this as opaque apart from [`method`](Self::method);
/// everything else exists for handler code. `extensions` lets shared-chain
/// handlers hand values (an authenticated user, a tenant id) to the method
/// chain that runs after them.
#[derive(Debug)]
pub struct ApiRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path without the query string
    pub path: String,
    /// Parsed query string parameters
    pub query_params: ParamVec,
    /// HTTP headers (lowercase keys)
    pub headers: HeaderVec,
    /// Cookies parsed from the Cookie header
    pub cookies: HeaderVec,
    /// Request body parsed as JSON (if present)
    pub body: Option<Value>,
    /// Per-request value store for cross-chain hand-off
    pub extensions: Extensions,
}

impl ApiRequest {
    /// Build a request from a method and a path.
    ///
    /// A query string in `path` is split off and parsed into
    /// [`query_params`](Self::query_params).
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let raw = path.into();
        let query_params = parse_query_params(&raw);
        let path = raw.split('?').next().unwrap_or("/").to_string();
        ApiRequest {
            method,
            path,
            query_params,
            headers: HeaderVec::new(),
            cookies: HeaderVec::new(),
            body: None,
            extensions: Extensions::new(),
        }
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a header. Names are stored lowercase; the cookie jar is rebuilt
    /// when a `Cookie` header arrives.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        let name = name.to_ascii_lowercase();
        let is_cookie = name == "cookie";
        self.headers.push((Arc::from(name.as_str()), value.into()));
        if is_cookie {
            self.cookies = parse_cookies(&self.headers);
        }
        self
    }

    /// Get a query parameter by name.
    ///
    /// Uses "last write wins" semantics: for duplicate names
    /// (e.g. `?limit=10&limit=20`) the last occurrence is returned.
    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a header by name (case-insensitive per RFC 7230).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get a cookie by name.
    #[inline]
    #[must_use]
    pub fn get_cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse query string parameters from a URL path.
///
/// Extracts everything after the `?` character and URL-decodes names and
/// values, preserving their order of appearance.
#[must_use]
pub fn parse_query_params(path: &str) -> ParamVec {
    match path.find('?') {
        Some(pos) => url::form_urlencoded::parse(path[pos + 1..].as_bytes())
            .map(|(k, v)| (Arc::from(k.as_ref()), v.to_string()))
            .collect(),
        None => ParamVec::new(),
    }
}

/// Parse cookies out of the `cookie` header, if any.
#[must_use]
pub fn parse_cookies(headers: &HeaderVec) -> HeaderVec {
    headers
        .iter()
        .find(|(k, _)| k.as_ref() == "cookie")
        .map(|(_, raw)| {
            raw.split(';')
                .filter_map(|pair| {
                    let mut parts = pair.trim().splitn(2, '=');
                    let name = parts.next()?.trim();
                    let value = parts.next().unwrap_or("").trim();
                    Some((Arc::from(name), value.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}
