use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::info;

use super::routes::scan_routes;
use super::templates::render_routes_module;

/// Scan `routes_dir` and write the rendered manifest module to `output`,
/// creating parent directories as needed. Returns the number of routes.
pub fn write_routes_module(routes_dir: &Path, output: &Path) -> anyhow::Result<usize> {
    let routes = scan_routes(routes_dir)?;
    let rendered = render_routes_module(&routes)?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, rendered)
        .with_context(|| format!("failed to write manifest to {}", output.display()))?;
    info!(
        route_count = routes.len(),
        output = %output.display(),
        "route manifest written"
    );
    Ok(routes.len())
}
