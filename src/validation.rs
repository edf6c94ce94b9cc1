//! # Validation Module
//!
//! JSON-Schema validation of request bodies, query parameters, and response
//! bodies.
//!
//! Schemas are compiled once when a [`RouteSchemas`] is built and shared via
//! `Arc`, so per-request validation never recompiles.
//! [`validate_request`] turns a schema set into an ordinary handler for the
//! shared chain: a violation raises an explicit `400` that flows through the
//! standard error-classification path, so custom error handlers see it like
//! any other domain error.
//!
//! ```
//! use chainroute::validation::{validate_request, RouteSchemas};
//! use chainroute::Router;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let schemas = RouteSchemas::new().body(&json!({
//!     "type": "object",
//!     "required": ["name"],
//!     "properties": { "name": { "type": "string" } }
//! }))?;
//!
//! let router = Router::new().wrap(validate_request(schemas));
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

use anyhow::Context;
use jsonschema::Validator;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::runtime_config::RuntimeConfig;
use crate::server::{ApiRequest, ApiResponse, ParamVec};

/// Compiled validators for one route.
///
/// All three slots are optional; an empty set validates nothing.
#[derive(Clone, Default)]
pub struct RouteSchemas {
    body: Option<Arc<Validator>>,
    query: Option<Arc<Validator>>,
    response: Option<Arc<Validator>>,
}

impl RouteSchemas {
    /// Create an empty schema set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the request-body schema.
    pub fn body(mut self, schema: &Value) -> anyhow::Result<Self> {
        self.body = Some(Arc::new(
            compile(schema).context("invalid request body schema")?,
        ));
        Ok(self)
    }

    /// Declare the query-parameter schema. Query values are strings; the
    /// schema should describe an object with string properties.
    pub fn query(mut self, schema: &Value) -> anyhow::Result<Self> {
        self.query = Some(Arc::new(
            compile(schema).context("invalid query parameter schema")?,
        ));
        Ok(self)
    }

    /// Declare the response-body schema, checked by [`check_response`].
    pub fn response(mut self, schema: &Value) -> anyhow::Result<Self> {
        self.response = Some(Arc::new(
            compile(schema).context("invalid response body schema")?,
        ));
        Ok(self)
    }
}

fn compile(schema: &Value) -> anyhow::Result<Validator> {
    jsonschema::validator_for(schema).map_err(|err| anyhow::anyhow!("{err}"))
}

fn query_object(params: &ParamVec) -> Value {
    let mut map = Map::new();
    for (k, v) in params {
        map.insert(k.to_string(), Value::String(v.clone()));
    }
    Value::Object(map)
}

/// Build a shared-chain handler that rejects requests violating the declared
/// body/query schemas with an explicit `400`.
pub fn validate_request(
    schemas: RouteSchemas,
) -> impl Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync + 'static {
    move |req, _res| {
        if let Some(validator) = &schemas.body {
            let body = req.body.clone().unwrap_or(Value::Null);
            if let Err(err) = validator.validate(&body) {
                debug!(error = %err, "request body rejected");
                return Err(ApiError::new(400, format!("invalid request body: {err}")).into());
            }
        }
        if let Some(validator) = &schemas.query {
            let query = query_object(&req.query_params);
            if let Err(err) = validator.validate(&query) {
                debug!(error = %err, "query parameters rejected");
                return Err(ApiError::new(400, format!("invalid query parameters: {err}")).into());
            }
        }
        Ok(())
    }
}

/// Check a finalized response body against the declared response schema.
///
/// Honors the `CHAINROUTE_VALIDATE_RESPONSES` toggle; intended for the host
/// layer and for tests, since the dispatch core never re-opens a finalized
/// response.
pub fn check_response(schemas: &RouteSchemas, res: &ApiResponse) -> anyhow::Result<()> {
    if !RuntimeConfig::from_env().validate_responses {
        debug!("response validation disabled");
        return Ok(());
    }
    if let Some(validator) = &schemas.response {
        if let Err(err) = validator.validate(res.body()) {
            anyhow::bail!("response body rejected by schema: {err}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::router::Router;
    use http::Method;
    use serde_json::json;

    fn widget_schemas() -> RouteSchemas {
        RouteSchemas::new()
            .body(&json!({
                "type": "object",
                "required": ["name"],
                "properties": { "name": { "type": "string" } }
            }))
            .unwrap()
            .query(&json!({
                "type": "object",
                "properties": { "dry_run": { "enum": ["true", "false"] } }
            }))
            .unwrap()
    }

    fn post_router() -> Router {
        Router::new()
            .wrap(validate_request(widget_schemas()))
            .post(|req: &mut ApiRequest, res: &mut ApiResponse| {
                res.send_json(201, json!({ "created": req.body.clone() }));
                Ok(())
            })
    }

    #[test]
    fn test_valid_request_passes_through() {
        let mut req =
            ApiRequest::new(Method::POST, "/widgets").with_body(json!({ "name": "sprocket" }));
        let mut res = ApiResponse::new();
        post_router().handle(&mut req, &mut res);
        assert_eq!(res.status(), 201);
    }

    #[test]
    fn test_invalid_body_is_rejected_with_400() {
        let mut req = ApiRequest::new(Method::POST, "/widgets").with_body(json!({ "nome": "x" }));
        let mut res = ApiResponse::new();
        post_router().handle(&mut req, &mut res);
        assert_eq!(res.status(), 400);
        let message = res.body()["message"].as_str().unwrap();
        assert!(message.starts_with("invalid request body"));
    }

    #[test]
    fn test_missing_body_is_rejected_when_schema_declared() {
        let mut req = ApiRequest::new(Method::POST, "/widgets");
        let mut res = ApiResponse::new();
        post_router().handle(&mut req, &mut res);
        assert_eq!(res.status(), 400);
    }

    #[test]
    fn test_invalid_query_is_rejected_with_400() {
        let mut req = ApiRequest::new(Method::POST, "/widgets?dry_run=maybe")
            .with_body(json!({ "name": "sprocket" }));
        let mut res = ApiResponse::new();
        post_router().handle(&mut req, &mut res);
        assert_eq!(res.status(), 400);
        let message = res.body()["message"].as_str().unwrap();
        assert!(message.starts_with("invalid query parameters"));
    }

    #[test]
    fn test_check_response_accepts_matching_body() {
        let schemas = RouteSchemas::new()
            .response(&json!({
                "type": "object",
                "required": ["ok"],
                "properties": { "ok": { "type": "boolean" } }
            }))
            .unwrap();
        let mut res = ApiResponse::new();
        res.send_json(200, json!({ "ok": true }));
        assert!(check_response(&schemas, &res).is_ok());
    }

    #[test]
    fn test_check_response_rejects_mismatched_body() {
        let schemas = RouteSchemas::new()
            .response(&json!({
                "type": "object",
                "required": ["ok"],
                "properties": { "ok": { "type": "boolean" } }
            }))
            .unwrap();
        let mut res = ApiResponse::new();
        res.send_json(200, json!({ "ok": "yes" }));
        assert!(check_response(&schemas, &res).is_err());
    }

    #[test]
    fn test_bad_schema_fails_at_build_time() {
        let result = RouteSchemas::new().body(&json!({ "type": 1 }));
        assert!(result.is_err());
    }
}
