//! Output file naming for screen assets.

use std::path::{Path, PathBuf};

use crate::formats::{AssetKind, ScreenRecord};

/// The screen's title, or its id when the title is missing or empty.
pub fn display_title(screen: &ScreenRecord) -> &str {
    match screen.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => screen.screen_id(),
    }
}

/// Replaces every `/` and every space with `_`. Nothing else is touched.
pub fn sanitize_title(title: &str) -> String {
    title.replace(['/', ' '], "_")
}

pub fn base_name(screen: &ScreenRecord) -> String {
    sanitize_title(display_title(screen))
}

pub fn asset_path(out_dir: &Path, base: &str, kind: AssetKind) -> PathBuf {
    out_dir.join(format!("{base}.{}", kind.extension()))
}
