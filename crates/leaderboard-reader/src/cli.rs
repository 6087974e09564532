use clap::Parser;
use leaderboard_client::RpcArgs;

#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub rpc: RpcArgs,

    #[arg(
        long,
        env,
        help = "Maximum number of leaderboard entries to read",
        default_value = "10"
    )]
    pub max_entries: u64,
}
