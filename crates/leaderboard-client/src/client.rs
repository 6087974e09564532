use std::sync::Arc;

use async_trait::async_trait;
use ethers::prelude::{JsonRpcClient, Provider};

use crate::contracts::Leaderboard;
use crate::transport::Transport;
use crate::{Address, ClientError, RpcArgs, U256};

#[async_trait]
pub trait Client: Send + Sync {
    /// Address of the bound leaderboard contract
    fn contract_addr(&self) -> Address;

    /// Get the participant address stored at the given leaderboard position.
    /// Unused positions hold the zero address.
    async fn leader_board(&self, index: U256) -> Result<Address, ClientError>;

    /// Get the display name registered for the participant
    async fn user_name(&self, address: Address) -> Result<String, ClientError>;
}

pub async fn get_client(
    RpcArgs {
        rpc_url,
        leaderboard_contract_addr,
    }: &RpcArgs,
) -> Result<Box<dyn Client>, ClientError> {
    match Transport::connect(rpc_url).await? {
        Transport::Http(provider) => Ok(RpcProvider::new(provider, *leaderboard_contract_addr)),
        Transport::Ws(provider) => Ok(RpcProvider::new(provider, *leaderboard_contract_addr)),
    }
}

#[derive(Clone)]
struct RpcProvider<T: JsonRpcClient + Clone + 'static> {
    contract: Leaderboard<Provider<T>>,
}

impl<T: JsonRpcClient + Clone + 'static> RpcProvider<T> {
    pub fn new(provider: Provider<T>, contract_addr: Address) -> Box<Self> {
        let client = Arc::new(provider);
        let contract = Leaderboard::get(client, contract_addr);
        Box::new(Self { contract })
    }
}

#[async_trait]
impl<T: JsonRpcClient + Clone + 'static> Client for RpcProvider<T> {
    fn contract_addr(&self) -> Address {
        self.contract.address()
    }

    async fn leader_board(&self, index: U256) -> Result<Address, ClientError> {
        let address = self.contract.leader_board(index).call().await?;
        log::trace!("leaderBoard({index}) = {address:?}");
        Ok(address)
    }

    async fn user_name(&self, address: Address) -> Result<String, ClientError> {
        let name = self.contract.user_names(address).call().await?;
        log::trace!("userNames({address:?}) = {name:?}");
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT_ADDR: &str = "0xE23fA1Df7AbBe8258050950142E910ca6C319F22";

    fn rpc_args(rpc_url: &str) -> RpcArgs {
        RpcArgs {
            rpc_url: rpc_url.to_string(),
            leaderboard_contract_addr: CONTRACT_ADDR.parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_http_client_binds_contract() {
        let client = get_client(&rpc_args("http://127.0.0.1:8545/"))
            .await
            .unwrap();
        assert_eq!(client.contract_addr(), CONTRACT_ADDR.parse().unwrap());
    }

    #[tokio::test]
    async fn test_unsupported_protocol() {
        let result = get_client(&rpc_args("tcp://127.0.0.1:8545/")).await;
        assert!(matches!(result, Err(ClientError::InvalidProtocol)));
    }

    // Reads the first leaderboard entry from a live node.
    // Set `RPC_TEST` env variable to a non-empty value to run this test
    // (and optionally `RPC_URL` to override the default endpoint).
    #[test_with::env(RPC_TEST)]
    #[tokio::test]
    async fn test_read_first_entry() {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| {
            "https://mainnet.infura.io/v3/5bb6e05480844c1abc24818340bbee7e".to_string()
        });
        let client = get_client(&rpc_args(&rpc_url)).await.unwrap();
        let address = client.leader_board(U256::zero()).await.unwrap();
        if !address.is_zero() {
            client.user_name(address).await.unwrap();
        }
    }
}
