//! # Server Module
//!
//! Concrete request/response facades for the dispatch engine.
//!
//! [`ApiRequest`] carries the parsed request data a handler sees; the host
//! layer builds one per incoming request. [`ApiResponse`] is the write side:
//! its finalized flag is what the dispatcher checks between handlers, and its
//! single [`ApiResponse::send_json`] operation is the one meaningful write a
//! request gets.

mod request;
mod response;

pub use request::{
    parse_cookies, parse_query_params, ApiRequest, HeaderVec, ParamVec, MAX_INLINE_HEADERS,
    MAX_INLINE_PARAMS,
};
pub use response::ApiResponse;
