use clap::Parser;
use ethers::utils::to_checksum;
use simple_logger::SimpleLogger;

use leaderboard_client::{RpcArgs, U256};

#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    rpc: RpcArgs,
    index: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;
    let cli = Cli::parse();

    let client = leaderboard_client::get_client(&cli.rpc).await?;
    let address = client.leader_board(U256::from(cli.index)).await?;
    if address.is_zero() {
        println!("No participant at position {}", cli.index);
        return Ok(());
    }
    let name = client.user_name(address).await?;
    println!("{name} ({})", to_checksum(&address, None));
    Ok(())
}
