use ethers::prelude::{Http, Provider, Ws};
use url::Url;

use crate::ClientError;

pub(crate) enum Transport {
    Http(Provider<Http>),
    Ws(Provider<Ws>),
}

impl Transport {
    /// Pick the provider by URL scheme. Only the WebSocket variant touches the network.
    pub(crate) async fn connect(rpc_url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(rpc_url)?;
        match url.scheme() {
            "http" | "https" => Ok(Transport::Http(Provider::new(Http::new(url)))),
            "ws" | "wss" => Ok(Transport::Ws(Provider::connect(url.as_str()).await?)),
            _ => Err(ClientError::InvalidProtocol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_url() {
        let transport = Transport::connect("https://127.0.0.1:8545/").await;
        assert!(matches!(transport, Ok(Transport::Http(_))));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let transport = Transport::connect("ipc:///tmp/geth.ipc").await;
        assert!(matches!(transport, Err(ClientError::InvalidProtocol)));
    }

    #[tokio::test]
    async fn test_malformed_http_url() {
        let transport = Transport::connect("http://").await;
        assert!(matches!(transport, Err(ClientError::InvalidRpcUrl(_))));
    }
}
