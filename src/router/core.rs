//! Router core - registry, fluent API, and the method switch.

use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::dispatcher::{DispatchOutcome, Dispatcher, ErrorHandler, Handler};
use crate::error::ApiError;
use crate::server::{ApiRequest, ApiResponse};

/// A registry of handler chains for one route.
///
/// Construct with [`Router::new`], register handlers through the fluent
/// methods, then call [`Router::run`] to obtain the entry point. The router
/// is meant to be built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct Router {
    wrap: Vec<Handler>,
    get: Vec<Handler>,
    post: Vec<Handler>,
    put: Vec<Handler>,
    delete: Vec<Handler>,
    patch: Vec<Handler>,
    dispatcher: Dispatcher,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create an empty router with the default error handler.
    #[must_use]
    pub fn new() -> Self {
        Router {
            wrap: Vec::new(),
            get: Vec::new(),
            post: Vec::new(),
            put: Vec::new(),
            delete: Vec::new(),
            patch: Vec::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Append a handler to the shared pre-dispatch chain, run for every
    /// method before the method chain.
    #[must_use]
    pub fn wrap<H>(mut self, handler: H) -> Self
    where
        H: Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.wrap.push(Arc::new(handler));
        self
    }

    /// Append a handler to the GET chain.
    #[must_use]
    pub fn get<H>(mut self, handler: H) -> Self
    where
        H: Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.get.push(Arc::new(handler));
        self
    }

    /// Append a handler to the POST chain.
    #[must_use]
    pub fn post<H>(mut self, handler: H) -> Self
    where
        H: Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.post.push(Arc::new(handler));
        self
    }

    /// Append a handler to the PUT chain.
    #[must_use]
    pub fn put<H>(mut self, handler: H) -> Self
    where
        H: Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.put.push(Arc::new(handler));
        self
    }

    /// Append a handler to the DELETE chain.
    #[must_use]
    pub fn delete<H>(mut self, handler: H) -> Self
    where
        H: Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.delete.push(Arc::new(handler));
        self
    }

    /// Append a handler to the PATCH chain.
    #[must_use]
    pub fn patch<H>(mut self, handler: H) -> Self
    where
        H: Fn(&mut ApiRequest, &mut ApiResponse) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.patch.push(Arc::new(handler));
        self
    }

    /// Replace the error handler. The last registration wins.
    #[must_use]
    pub fn on_error<H>(mut self, handler: H) -> Self
    where
        H: Fn(&ApiError, &ApiRequest, &mut ApiResponse) + Send + Sync + 'static,
    {
        let handler: ErrorHandler = Arc::new(handler);
        self.dispatcher.set_error_handler(handler);
        self
    }

    /// Seal the router and return the entry point for one route.
    ///
    /// The returned function is what a host HTTP server mounts; it can be
    /// called concurrently from any number of requests.
    #[must_use]
    pub fn run(self) -> impl Fn(&mut ApiRequest, &mut ApiResponse) + Send + Sync + 'static {
        let router = Arc::new(self);
        move |req, res| router.handle(req, res)
    }

    /// Dispatch one request: shared chain, then exactly one method chain.
    pub fn handle(&self, req: &mut ApiRequest, res: &mut ApiResponse) {
        if self.dispatcher.dispatch(&self.wrap, req, res, false) == DispatchOutcome::ErrorHandled {
            return;
        }
        if res.is_ended() {
            debug!(method = %req.method, "shared chain finalized response, skipping method chain");
            return;
        }
        let chain = match req.method.as_str() {
            "GET" => &self.get,
            "POST" => &self.post,
            "PUT" => &self.put,
            "DELETE" => &self.delete,
            "PATCH" => &self.patch,
            other => {
                debug!(method = %other, "method not allowed");
                res.send_json(405, json!({ "message": "Method not allowed" }));
                return;
            }
        };
        self.dispatcher.dispatch(chain, req, res, true);
    }
}
