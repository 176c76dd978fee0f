use std::collections::HashSet;

use crate::formats::{Manifest, ScreenRecord};

/// Screen ids fetched when neither the config file nor the CLI names any.
pub const DEFAULT_TARGET_IDS: [&str; 32] = [
    "0189843a298e4342ae19a301ef4ad229",
    "0491b20a335b4ff09b6b5cb0c540bda6",
    "11a8fd30541449a295071b5f96aacb12",
    "3695848966614711823daddebecd9923",
    "427a7d389ef649f4bd33854f265df375",
    "5aa5fd303d404bf4b7ff56e6fbd0e57b",
    "688c2a8f5dea4a01a93a5d25fd8bb06c",
    "6abdf40c5a6d4203979010677bbbcb97",
    "73832ce6d7964aa2b1fe5e6807b2841f",
    "805fb2d971e74252aa022a954f9734cf",
    "8192b31f52294f1cab7afdd0c9dab809",
    "90cc4dd73b264c4c90eac0a7ffdd8cba",
    "b6df5cfb88e54f1fa31fadd6d2d92708",
    "d400aa0c2b004aada3bf0dd7d4dd7dee",
    "de0470efdb3c4d07a84655cdf3478b0d",
    "edcab9af03e54bd89ad4e6ef5aff2dcb",
    "20ab787e5f3347df99d200f59781d7eb",
    "28e2d82e4c684f6f91074e02983afcbe",
    "42a2124a79e145a6889f494bf7aa6410",
    "47c7d88785bb4f169b9d3e1c5c701f64",
    "5384c518d8164420b4c994a5632a8d99",
    "6ca95b95602c4901b74e7e328b9a0a07",
    "76eed3a1647a4cc4a7d13785fb9a3ee1",
    "84b51ef8430c4d1aad45809eea911558",
    "8995b2eb041742739ba5d1c205955e1a",
    "950a3d92c0e14df89b64a2d214483cca",
    "ac7b093e4e624078bcf1a53217dc2236",
    "b5b5a688ca344c29966c36950a91d09a",
    "c2a77eaf94ff486fa97d93e57ceed27c",
    "c4b88b1f106d467387135d62e9367220",
    "d1e6e0e810454476bd0c2590df2233b4",
    "e98f82e269864c25a68f26178406cb9a",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetIdSet {
    ids: HashSet<String>,
}

impl TargetIdSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, screen_id: &str) -> bool {
        self.ids.contains(screen_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for TargetIdSet {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_IDS)
    }
}

/// Last `/` segment of a screen resource name. An empty name yields `""`.
pub fn screen_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or_default()
}

/// Screens whose id is in `targets`, in manifest order.
pub fn select<'a>(
    manifest: &'a Manifest,
    targets: &'a TargetIdSet,
) -> impl Iterator<Item = &'a ScreenRecord> + 'a {
    manifest
        .screens
        .iter()
        .filter(move |screen| targets.contains(screen.screen_id()))
}
