use std::path::Path;

use anyhow::Context as _;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::formats::{AssetKind, ScreenRecord};

const USER_AGENT_VALUE: &str = concat!("stitch-fetch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub screens: usize,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Asset slots with no download URL.
    pub skipped: usize,
}

impl FetchSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build download http client")?;
        Ok(Self { client })
    }

    /// Fetches every asset the screen links to into `out_dir`.
    ///
    /// Failures are logged and counted in `summary`; they never abort the
    /// remaining assets.
    pub fn fetch_screen(
        &self,
        screen: &ScreenRecord,
        out_dir: &Path,
        summary: &mut FetchSummary,
    ) {
        let screen_id = screen.screen_id();
        let base = crate::naming::base_name(screen);
        summary.screens += 1;

        for kind in AssetKind::ALL {
            let Some(url) = screen.asset_url(kind) else {
                tracing::debug!(
                    screen_id,
                    asset = kind.extension(),
                    "no download url; skipping"
                );
                summary.skipped += 1;
                continue;
            };

            let path = crate::naming::asset_path(out_dir, &base, kind);
            summary.attempted += 1;
            match self.fetch_asset(url, &path) {
                Ok(bytes) => {
                    summary.succeeded += 1;
                    tracing::info!(
                        screen_id,
                        asset = kind.extension(),
                        path = %path.display(),
                        bytes,
                        "downloaded"
                    );
                }
                Err(err) => {
                    summary.failed += 1;
                    let error = format!("{err:#}");
                    tracing::warn!(
                        screen_id,
                        asset = kind.extension(),
                        url,
                        error = %error,
                        "download failed; continuing"
                    );
                }
            }
        }
    }

    /// GETs `url` and writes the body to `path`, replacing any existing file.
    ///
    /// Returns the number of bytes written on a 2xx response.
    pub fn fetch_asset(&self, url: &str, path: &Path) -> anyhow::Result<u64> {
        let url = Url::parse(url).with_context(|| format!("parse download url: {url}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("download url must be http/https: {url}");
        }

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .with_context(|| format!("GET {url}"))?;

        // The body is written whatever the status; a non-2xx response still
        // replaces the previous file and is reported as a failure.
        let status = response.status();
        let body = response
            .bytes()
            .with_context(|| format!("read response body: {url}"))?;
        std::fs::write(path, &body)
            .with_context(|| format!("write asset: {}", path.display()))?;

        if !status.is_success() {
            anyhow::bail!(
                "GET {url}: unexpected status {status} (body written to {})",
                path.display()
            );
        }

        Ok(body.len() as u64)
    }
}
