use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Registration methods the scanner recognizes, in manifest order.
const METHOD_CALLS: [(&str, &str); 5] = [
    (".get(", "GET"),
    (".post(", "POST"),
    (".put(", "PUT"),
    (".delete(", "DELETE"),
    (".patch(", "PATCH"),
];

/// One route discovered under the routes directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// URL pattern with `[param]` placeholders (e.g. `/widgets/[id]`)
    pub pattern: String,
    /// Source file, relative to the routes directory, forward slashes
    pub source: String,
    /// Path parameter names in pattern order
    pub params: Vec<String>,
    /// Methods the file registers, detected from its fluent calls
    pub methods: Vec<String>,
}

/// Scan a routes directory and return its entries in path order.
///
/// Every `.rs` file except `mod.rs` is a route; hidden directories are
/// skipped. `index` files collapse to the directory path and bracketed
/// segments become path parameters.
pub fn scan_routes(dir: &Path) -> anyhow::Result<Vec<RouteEntry>> {
    let mut files = Vec::new();
    collect_route_files(dir, dir, &mut files)?;
    files.sort();

    let mut entries = Vec::with_capacity(files.len());
    for rel in files {
        let content = fs::read_to_string(dir.join(&rel))
            .with_context(|| format!("failed to read route file {}", rel.display()))?;
        let pattern = url_pattern(&rel);
        debug!(source = %rel.display(), pattern = %pattern, "route discovered");
        entries.push(RouteEntry {
            params: pattern_params(&pattern),
            methods: detect_methods(&content),
            source: to_slash_path(&rel),
            pattern,
        });
    }
    Ok(entries)
}

fn collect_route_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read routes directory {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list {}", dir.display()))?
            .path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        if name.starts_with('.') {
            continue;
        }
        if path.is_dir() {
            collect_route_files(root, &path, out)?;
        } else if name.ends_with(".rs") && name != "mod.rs" {
            let rel = path
                .strip_prefix(root)
                .with_context(|| format!("route file {} escapes the routes root", path.display()))?;
            out.push(rel.to_path_buf());
        }
    }
    Ok(())
}

/// Derive the URL pattern for a route file path.
///
/// `widgets/[id].rs` → `/widgets/[id]`; a final `index` segment collapses to
/// the directory path, so `widgets/index.rs` → `/widgets` and the top-level
/// `index.rs` → `/`.
pub(crate) fn url_pattern(rel: &Path) -> String {
    let stem = rel.with_extension("");
    let mut parts: Vec<String> = stem
        .iter()
        .map(|c| c.to_string_lossy().into_owned())
        .collect();
    if parts.last().map(String::as_str) == Some("index") {
        parts.pop();
    }
    format!("/{}", parts.join("/"))
}

/// Extract `[param]` names from a pattern, in order.
pub(crate) fn pattern_params(pattern: &str) -> Vec<String> {
    pattern
        .split('/')
        .filter(|s| s.len() > 2 && s.starts_with('[') && s.ends_with(']'))
        .map(|s| s[1..s.len() - 1].to_string())
        .collect()
}

/// Detect registered methods from a route file's source text.
pub(crate) fn detect_methods(content: &str) -> Vec<String> {
    METHOD_CALLS
        .iter()
        .filter(|(needle, _)| content.contains(needle))
        .map(|(_, method)| (*method).to_string())
        .collect()
}

fn to_slash_path(rel: &Path) -> String {
    rel.iter()
        .map(|c| c.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
