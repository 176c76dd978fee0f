use std::io::Write as _;

use anyhow::Context as _;

use crate::config::PlanConfig;
use crate::formats::{AssetKind, ScreenRecord};

pub fn run(config: &PlanConfig) -> anyhow::Result<()> {
    let manifest = crate::manifest::load(&config.manifest_path).context("load manifest")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for screen in crate::select::select(&manifest, &config.targets) {
        writeln!(out, "{}", plan_line(screen)).context("write plan line")?;
    }
    out.flush().context("flush plan")?;

    Ok(())
}

/// `<screen id>\t<base name>\t<extensions to fetch>`.
pub fn plan_line(screen: &ScreenRecord) -> String {
    let assets = AssetKind::ALL
        .into_iter()
        .filter(|kind| screen.asset_url(*kind).is_some())
        .map(AssetKind::extension)
        .collect::<Vec<_>>();
    let assets = if assets.is_empty() {
        "-".to_owned()
    } else {
        assets.join(",")
    };

    format!(
        "{}\t{}\t{assets}",
        screen.screen_id(),
        crate::naming::base_name(screen)
    )
}
