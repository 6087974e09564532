mod cli;
mod client;
mod contracts;
mod error;
mod transport;

pub use ethers::types::{Address, U256};

pub use cli::RpcArgs;
pub use client::{get_client, Client};
pub use contracts::LeaderboardErrors;
pub use error::ClientError;
