use anyhow::Context as _;

use crate::config::FetchConfig;
use crate::download::{Downloader, FetchSummary};

/// Loads the manifest, selects the target screens and downloads their assets.
///
/// Only pre-flight problems (output dir, manifest) are returned as errors.
/// Per-asset failures are reported through the summary.
pub fn run(config: &FetchConfig) -> anyhow::Result<FetchSummary> {
    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("create output dir: {}", config.out_dir.display()))?;

    let manifest = crate::manifest::load(&config.manifest_path).context("load manifest")?;
    tracing::info!(
        manifest = %config.manifest_path.display(),
        screens = manifest.screens.len(),
        targets = config.targets.len(),
        "loaded manifest"
    );

    let downloader = Downloader::new()?;
    let mut summary = FetchSummary::default();
    for screen in crate::select::select(&manifest, &config.targets) {
        downloader.fetch_screen(screen, &config.out_dir, &mut summary);
    }

    tracing::info!(
        screens = summary.screens,
        attempted = summary.attempted,
        succeeded = summary.succeeded,
        failed = summary.failed,
        skipped = summary.skipped,
        out = %config.out_dir.display(),
        "fetch finished"
    );

    Ok(summary)
}
