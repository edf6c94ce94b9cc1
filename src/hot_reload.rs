//! # Hot Reload Module
//!
//! Regenerates the route manifest when the routes directory changes, so the
//! manifest stays current while routes are being added or renamed during
//! development.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chainroute::hot_reload::watch_routes;
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let watcher = watch_routes("routes", PathBuf::from("src/generated_routes.rs"))?;
//! // Keep the watcher alive for as long as regeneration should run.
//! # drop(watcher);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! If a regeneration fails (for instance a route file disappears mid-scan),
//! the error is logged and the previous manifest stays in place; the watcher
//! keeps running. This is a development tool; production builds should
//! generate the manifest once at build time.

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::generator::write_routes_module;

/// Watch a routes directory and rewrite the manifest at `output` whenever a
/// route file is created, modified, or removed.
pub fn watch_routes<P: AsRef<Path>>(
    routes_dir: P,
    output: PathBuf,
) -> notify::Result<RecommendedWatcher> {
    let routes_dir: PathBuf = routes_dir.as_ref().to_path_buf();
    let scan_dir = routes_dir.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    match write_routes_module(&scan_dir, &output) {
                        Ok(count) => {
                            info!(route_count = count, "route manifest regenerated");
                        }
                        Err(err) => {
                            error!(error = %err, "regeneration failed, keeping previous manifest");
                        }
                    }
                }
            }
            Err(err) => error!(error = %err, "watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&routes_dir, RecursiveMode::Recursive)?;
    Ok(watcher)
}
