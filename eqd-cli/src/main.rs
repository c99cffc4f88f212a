//! EQD CLI - Command line tool for exploring the USGS earthquake feed.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "eqd-cli",
    version,
    about = "Earthquake feed explorer"
)]
struct Cli {
    #[command(flatten)]
    feed: eqd_cmd::FeedArgs,

    #[command(subcommand)]
    command: eqd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[EQD] cli: feed source {:?}", cli.feed);
    eqd_cmd::run(cli.feed, cli.command).await
}
