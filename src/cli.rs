use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Fetch(FetchArgs),
    Plan(PlanArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// YAML config file (`manifest`, `out_dir`, `target_ids`).
    #[arg(long)]
    pub config: Option<String>,

    /// Input path to the screens manifest JSON.
    #[arg(long)]
    pub manifest: Option<String>,

    /// Output directory for downloaded assets (created if missing).
    #[arg(long)]
    pub out: Option<String>,

    /// Screen id to fetch; repeat to fetch several (default: built-in list).
    #[arg(long = "target", value_name = "ID")]
    pub targets: Vec<String>,

    /// Exit non-zero when any asset failed to download.
    #[arg(long)]
    pub fail_on_error: bool,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// YAML config file (`manifest`, `target_ids`).
    #[arg(long)]
    pub config: Option<String>,

    /// Input path to the screens manifest JSON.
    #[arg(long)]
    pub manifest: Option<String>,

    /// Screen id to select; repeat to select several (default: built-in list).
    #[arg(long = "target", value_name = "ID")]
    pub targets: Vec<String>,
}
