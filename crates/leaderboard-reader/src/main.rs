use std::sync::Arc;

use clap::Parser;
use env_logger::Env;

use crate::cli::Cli;
use crate::reader::{LeaderboardReader, StopReason};

mod cli;
mod reader;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Init logger and parse arguments
    env_logger::Builder::from_env(Env::default().default_filter_or("info, ethers_providers=warn"))
        .init();
    let args: Cli = Cli::parse();

    let client: Arc<dyn leaderboard_client::Client> =
        leaderboard_client::get_client(&args.rpc).await?.into();
    log::info!("Using leaderboard contract {:?}", client.contract_addr());

    let reader = LeaderboardReader::new(client);
    let summary = reader
        .run(args.max_entries, &mut std::io::stdout().lock())
        .await?;
    match summary.stop {
        StopReason::EndOfList { index } => log::info!("Zero address at position {index}"),
        StopReason::Failed { index, error } => {
            log::warn!("Reading entry {index} failed: {error:?}")
        }
        StopReason::Exhausted => log::info!(
            "Entry cap reached after {} participants",
            summary.participants.len()
        ),
    }
    Ok(())
}
