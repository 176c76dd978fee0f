use std::path::Path;

use anyhow::Context as _;

use crate::formats::Manifest;

/// Reads and parses a screens manifest.
///
/// A missing file keeps its `std::io::Error` (kind `NotFound`) in the error
/// chain and malformed content keeps its `serde_json::Error`, so callers can
/// tell the two apart with `downcast_ref`.
pub fn load(path: &Path) -> anyhow::Result<Manifest> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read manifest: {}", path.display()))?;
    parse(&contents).with_context(|| format!("parse manifest: {}", path.display()))
}

pub fn parse(contents: &str) -> anyhow::Result<Manifest> {
    let manifest: Manifest =
        serde_json::from_str(contents).context("deserialize manifest json")?;
    Ok(manifest)
}
