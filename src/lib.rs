//! # chainroute
//!
//! **chainroute** is a middleware-chain request dispatcher for HTTP-style
//! handlers. One [`Router`] backs one route: it accumulates ordered handler
//! chains per HTTP method plus a shared pre-dispatch chain, and [`Router::run`]
//! produces a single entry-point function `(request, response) -> ()` that can
//! be mounted on any host HTTP server.
//!
//! ## Overview
//!
//! The library is organized into several key modules:
//!
//! - **[`router`]** - handler-chain registry, fluent registration API, and the
//!   per-method dispatch switch
//! - **[`dispatcher`]** - chain execution with short-circuit and
//!   catch-and-classify semantics
//! - **[`error`]** - the tagged [`ApiError`] and failure classification
//! - **[`server`]** - concrete request/response facades ([`ApiRequest`],
//!   [`ApiResponse`]) with the finalized-response flag the dispatcher observes
//! - **[`validation`]** - JSON-Schema validation of request bodies, query
//!   parameters, and response bodies
//! - **[`client`]** - a blocking JSON client with `[param]` path templating
//! - **[`generator`]** - route-manifest generation from a routes directory
//! - **[`hot_reload`]** - filesystem watcher that regenerates the manifest
//! - **[`cli`]** - the `chainroute-gen` command-line tool
//! - **[`runtime_config`]** - environment-variable runtime configuration
//!
//! ## Dispatch semantics
//!
//! For every incoming request the entry point runs the shared chain first,
//! then exactly one method chain. Handlers execute strictly in registration
//! order; once a handler finalizes the response, the remaining handlers are
//! skipped. A method chain that is empty, or that completes without anyone
//! finalizing the response, is reported as `404 Not Found` through the active
//! error handler. Handler failures are classified: an [`ApiError`] keeps its
//! status and message, anything else becomes a `500 Internal Server Error`
//! with the original cause kept out of the body. Unrecognized methods receive
//! a fixed `405` response without touching user code.
//!
//! ## Quick start
//!
//! ```
//! use chainroute::{ApiRequest, ApiResponse, Router};
//! use serde_json::json;
//!
//! let handle = Router::new()
//!     .get(|_req: &mut ApiRequest, res: &mut ApiResponse| {
//!         res.send_json(200, json!({ "ok": true }));
//!         Ok(())
//!     })
//!     .run();
//!
//! let mut req = ApiRequest::new(http::Method::GET, "/widgets");
//! let mut res = ApiResponse::new();
//! handle(&mut req, &mut res);
//! assert_eq!(res.status(), 200);
//! ```
//!
//! ## Route manifests
//!
//! The `chainroute-gen` binary scans a directory of route modules and emits a
//! static manifest of URL patterns, path parameters, and registered methods:
//!
//! ```bash
//! chainroute-gen generate --routes-dir routes --output src/generated_routes.rs --watch
//! ```

pub mod cli;
pub mod client;
pub mod dispatcher;
pub mod echo;
pub mod error;
pub mod generator;
pub mod hot_reload;
pub mod router;
pub mod runtime_config;
pub mod server;
pub mod validation;

pub use dispatcher::{DispatchOutcome, Dispatcher, ErrorHandler, Handler};
pub use error::ApiError;
pub use router::Router;
pub use server::{ApiRequest, ApiResponse};
