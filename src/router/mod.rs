//! # Router Module
//!
//! The handler-chain registry and the per-method dispatch switch.
//!
//! ## Overview
//!
//! One [`Router`] backs one route. It owns six ordered handler chains (a
//! shared pre-dispatch chain registered with [`Router::wrap`] plus one chain
//! per method: `get`, `post`, `put`, `delete`, `patch`) and a single
//! replaceable error handler. Registration is a consuming builder: each call
//! appends a handler (duplicates allowed, order preserved) and returns the
//! router so calls chain. [`Router::run`] seals the router and returns the
//! entry-point function a host server mounts for the route.
//!
//! ## Request flow
//!
//! 1. The shared chain runs first, for every method. Its handlers act as
//!    gates: finalizing the response early skips everything that follows,
//!    and a failure is answered by the error handler and ends the request.
//! 2. Exactly one method chain runs next, selected by the request method.
//!    An empty or silently-completing method chain yields `404 Not Found`.
//! 3. A method outside the five registered verbs gets the fixed
//!    `405 {"message":"Method not allowed"}` response; no user code runs.
//!
//! ## Example
//!
//! ```
//! use chainroute::{ApiError, ApiRequest, ApiResponse, Router};
//! use serde_json::json;
//!
//! let handle = Router::new()
//!     .wrap(|req: &mut ApiRequest, _res: &mut ApiResponse| {
//!         if req.get_header("authorization").is_none() {
//!             return Err(ApiError::new(401, "Unauthorized").into());
//!         }
//!         Ok(())
//!     })
//!     .get(|_req: &mut ApiRequest, res: &mut ApiResponse| {
//!         res.send_json(200, json!({ "widgets": [] }));
//!         Ok(())
//!     })
//!     .run();
//!
//! let mut req = ApiRequest::new(http::Method::GET, "/widgets");
//! let mut res = ApiResponse::new();
//! handle(&mut req, &mut res);
//! assert_eq!(res.status(), 401);
//! ```
//!
//! Registration must finish before traffic begins: the entry point shares the
//! chains across requests and never mutates them.

mod core;

pub use core::Router;
