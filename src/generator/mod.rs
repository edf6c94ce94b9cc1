//! # Generator Module
//!
//! Route-manifest generation from a routes directory.
//!
//! ## Overview
//!
//! A project lays its routes out as a directory tree of Rust modules, one
//! file per route, Next.js-style:
//!
//! ```text
//! routes/
//! ├── index.rs            →  /
//! ├── widgets/
//! │   ├── index.rs        →  /widgets
//! │   └── [id].rs         →  /widgets/[id]     (path param "id")
//! └── health.rs           →  /health
//! ```
//!
//! The generator scans the tree, derives each file's URL pattern and path
//! parameters, detects which methods the file registers (by looking for the
//! fluent registration calls in its source), and renders a static manifest
//! module. The manifest is plain data (URL pattern, source file, parameters,
//! methods) for the host's route mounting, documentation, or client code to
//! consume; it performs no path matching itself.
//!
//! Patterns keep the `[param]` placeholder form so they can be passed
//! directly to [`crate::client::build_url`].

mod project;
mod routes;
mod templates;

pub use project::write_routes_module;
pub use routes::{scan_routes, RouteEntry};
pub use templates::render_routes_module;
