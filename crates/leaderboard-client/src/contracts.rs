use ethers::contract::abigen;
use ethers::providers::Middleware;
use std::sync::Arc;

use crate::Address;

pub use leaderboard::LeaderboardErrors;

abigen!(Leaderboard, "abi/Leaderboard.json");

impl<T: Middleware> Leaderboard<T> {
    pub fn get(client: Arc<T>, addr: Address) -> Self {
        Self::new(addr, client)
    }
}
