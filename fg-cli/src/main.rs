//! FlowGuard CLI - run the sensor simulation and the demo session headless.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "fg-cli",
    version,
    about = "FlowGuard stormwater monitoring demo toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: fg_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    fg_cmd::run(cli.command).await
}
