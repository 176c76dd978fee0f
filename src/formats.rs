use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub screens: Vec<ScreenRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenRecord {
    /// Slash-delimited resource name; the last segment is the screen id.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<DownloadLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_code: Option<DownloadLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl ScreenRecord {
    pub fn screen_id(&self) -> &str {
        crate::select::screen_id(&self.name)
    }

    /// Empty URLs count as absent.
    pub fn screenshot_url(&self) -> Option<&str> {
        self.screenshot
            .as_ref()
            .and_then(|link| link.download_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn html_url(&self) -> Option<&str> {
        self.html_code
            .as_ref()
            .and_then(|link| link.download_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn asset_url(&self, kind: AssetKind) -> Option<&str> {
        match kind {
            AssetKind::Screenshot => self.screenshot_url(),
            AssetKind::Html => self.html_url(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Screenshot,
    Html,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Screenshot, AssetKind::Html];

    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Screenshot => "png",
            AssetKind::Html => "html",
        }
    }
}
