use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use secret_recovery::config::Config;
use secret_recovery::report::run_all;

#[derive(Parser)]
#[command(name = "secret-recovery")]
#[command(about = "Recover a Shamir secret from base-encoded shares", long_about = None)]
struct Cli {
    /// JSON config listing the share documents to process
    #[arg(long)]
    config: Option<PathBuf>,

    /// Share documents to process (defaults to input1.json and input2.json)
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = Config::resolve(cli.paths, cli.config.as_deref())?;
    log::debug!("processing {} source(s)", config.sources.len());

    let summary = run_all(
        &config.share_sources(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    log::info!(
        "{} of {} source(s) recovered, {} failed",
        summary.succeeded(),
        summary.processed,
        summary.failed
    );
    Ok(())
}
