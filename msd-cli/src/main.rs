//! msd-cli - command line client for the malaria surveillance backend.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "msd-cli",
    version,
    about = "Malaria surveillance data toolkit"
)]
struct Cli {
    /// Backend base URL
    #[arg(long, default_value = msd_core::api::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: msd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    msd_cmd::run(&cli.base_url, cli.command).await
}
