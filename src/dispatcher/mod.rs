//! # Dispatcher Module
//!
//! Chain execution for the router: runs one ordered handler chain against a
//! request/response pair and funnels every failure through the active error
//! handler.
//!
//! ## Execution rules
//!
//! 1. A terminal chain (one selected by method) that is empty fails with
//!    `404 Not Found` before any user code runs.
//! 2. Handlers run strictly in registration order; before each invocation the
//!    dispatcher checks whether the response is already finalized and stops
//!    iterating if so. Short-circuiting this way is not an error.
//! 3. A terminal chain whose handlers all complete without finalizing the
//!    response also fails with `404 Not Found`: falling through a chain
//!    without responding is equivalent to the chain being empty.
//! 4. Any failure is classified ([`crate::error::classify`]) and handed to the
//!    single active error handler. The error handler itself is not guarded: a
//!    panic inside it propagates to the host runtime.
//!
//! The shared pre-dispatch chain uses the same loop without the 404 synthesis
//! (rules 2 and 4 only): completing it without a response is the normal path
//! to the method chain.

mod core;

pub use core::{default_error_handler, DispatchOutcome, Dispatcher, ErrorHandler, Handler};
