use clap::Args;

use crate::Address;

#[derive(Args, Clone)]
pub struct RpcArgs {
    #[arg(
        long,
        env,
        help = "Blockchain RPC URL",
        default_value = "https://mainnet.infura.io/v3/5bb6e05480844c1abc24818340bbee7e"
    )]
    pub rpc_url: String,
    #[arg(
        long,
        env,
        help = "Address of the leaderboard contract",
        default_value = "0xE23fA1Df7AbBe8258050950142E910ca6C319F22"
    )]
    pub leaderboard_contract_addr: Address,
}
