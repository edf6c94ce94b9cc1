//! A ready-made handler that reflects the request back to the caller.

use serde_json::{json, Map, Value};

use crate::server::{ApiRequest, ApiResponse};

/// Finalize the response with a reflection of the request: method, path,
/// query parameters, and body. Useful as a placeholder while a route is
/// under construction.
pub fn echo_handler(req: &mut ApiRequest, res: &mut ApiResponse) -> anyhow::Result<()> {
    let query: Map<String, Value> = req
        .query_params
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.clone())))
        .collect();
    res.send_json(
        200,
        json!({
            "method": req.method.as_str(),
            "path": req.path,
            "query": query,
            "body": req.body,
        }),
    );
    Ok(())
}
