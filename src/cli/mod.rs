//! # CLI Module
//!
//! Command-line interface for the `chainroute-gen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Scan a routes directory and write the route-manifest module:
//!
//! ```bash
//! chainroute-gen generate --routes-dir routes --output src/generated_routes.rs
//! ```
//!
//! Options:
//! - `--routes-dir <DIR>` - directory of route modules (default: `routes`)
//! - `--output <FILE>` - manifest destination (default: `src/generated_routes.rs`)
//! - `--watch` - keep running and regenerate on changes
//!
//! ### `routes`
//!
//! Print the routes discovered in a directory without writing anything:
//!
//! ```bash
//! chainroute-gen routes --routes-dir routes
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
