use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    stitch_fetch::logging::init().context("init logging")?;

    let cli = stitch_fetch::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        stitch_fetch::cli::Command::Fetch(args) => {
            let config =
                stitch_fetch::config::FetchConfig::from_args(&args).context("resolve config")?;
            let summary = stitch_fetch::fetch::run(&config).context("fetch")?;
            println!("Done!");
            if config.fail_on_error && summary.has_failures() {
                eprintln!("{} of {} assets failed", summary.failed, summary.attempted);
                return Ok(ExitCode::FAILURE);
            }
        }
        stitch_fetch::cli::Command::Plan(args) => {
            let config =
                stitch_fetch::config::PlanConfig::from_args(&args).context("resolve config")?;
            stitch_fetch::plan::run(&config).context("plan")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
