use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::cli::{FetchArgs, PlanArgs};
use crate::select::TargetIdSet;

/// Contents of the optional `--config` YAML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub target_ids: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        let config: ConfigFile = serde_yaml::from_str(&contents)
            .with_context(|| format!("parse config: {}", path.display()))?;
        Ok(config)
    }

    fn load_optional(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(Path::new(path)),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub manifest_path: PathBuf,
    pub out_dir: PathBuf,
    pub targets: TargetIdSet,
    pub fail_on_error: bool,
}

impl FetchConfig {
    pub fn from_args(args: &FetchArgs) -> anyhow::Result<Self> {
        let file = ConfigFile::load_optional(args.config.as_deref())?;
        Self::resolve(args, file)
    }

    fn resolve(args: &FetchArgs, file: ConfigFile) -> anyhow::Result<Self> {
        let manifest_path = resolve_manifest(args.manifest.as_deref(), file.manifest)?;
        let out_dir = match (args.out.as_deref(), file.out_dir) {
            (Some(out), _) => PathBuf::from(out),
            (None, Some(out)) => out,
            (None, None) => anyhow::bail!("output directory is not set (use --out or `out_dir`)"),
        };
        let targets = resolve_targets(&args.targets, file.target_ids);

        Ok(Self {
            manifest_path,
            out_dir,
            targets,
            fail_on_error: args.fail_on_error,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub manifest_path: PathBuf,
    pub targets: TargetIdSet,
}

impl PlanConfig {
    pub fn from_args(args: &PlanArgs) -> anyhow::Result<Self> {
        let file = ConfigFile::load_optional(args.config.as_deref())?;
        Ok(Self {
            manifest_path: resolve_manifest(args.manifest.as_deref(), file.manifest)?,
            targets: resolve_targets(&args.targets, file.target_ids),
        })
    }
}

fn resolve_manifest(flag: Option<&str>, file: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match (flag, file) {
        (Some(path), _) => Ok(PathBuf::from(path)),
        (None, Some(path)) => Ok(path),
        (None, None) => anyhow::bail!("manifest path is not set (use --manifest or `manifest`)"),
    }
}

fn resolve_targets(flags: &[String], file: Option<Vec<String>>) -> TargetIdSet {
    if !flags.is_empty() {
        return TargetIdSet::new(flags.iter().cloned());
    }
    match file {
        Some(ids) => TargetIdSet::new(ids),
        None => TargetIdSet::default(),
    }
}
