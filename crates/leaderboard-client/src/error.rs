use ethers::contract::ContractError;
use ethers::prelude::{AbiError, Middleware};

use crate::contracts::LeaderboardErrors;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid RPC URL: {0:?}")]
    InvalidRpcUrl(#[from] url::ParseError),
    #[error("Unsupported RPC protocol")]
    InvalidProtocol,
    #[error("RPC provider error: {0}")]
    Provider(#[from] ethers::providers::ProviderError),
    #[error("Contract reverted: {0:?}")]
    Revert(LeaderboardErrors),
    #[error("Contract error: {0}")]
    Contract(String),
}

impl<M: Middleware> From<ContractError<M>> for ClientError {
    fn from(err: ContractError<M>) -> Self {
        match err.decode_contract_revert::<LeaderboardErrors>() {
            Some(revert) => Self::Revert(revert),
            None => Self::Contract(err.to_string()),
        }
    }
}

impl From<AbiError> for ClientError {
    fn from(err: AbiError) -> Self {
        Self::Contract(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use ethers::prelude::{Bytes, Http, Provider};
    use ethers::utils::id;

    use super::*;

    #[test]
    fn test_custom_revert_is_decoded() {
        let data = Bytes::from(id("AddressNotRegistered()").to_vec());
        let err: ClientError = ContractError::<Provider<Http>>::Revert(data).into();
        assert!(matches!(
            err,
            ClientError::Revert(LeaderboardErrors::AddressNotRegistered(_))
        ));
    }

    #[test]
    fn test_unknown_revert_falls_back_to_text() {
        let data = Bytes::from(vec![1, 2, 3, 4]);
        let err: ClientError = ContractError::<Provider<Http>>::Revert(data).into();
        assert!(matches!(err, ClientError::Contract(_)));
    }
}
