use std::{fmt, str::FromStr};
use url::Url;

/// The public RPC endpoint of the mainnet.
pub const MAINNET_RPC_URL: &str = "https://mainnet.ckbapp.dev/rpc";
/// The public RPC endpoint of the testnet.
pub const TESTNET_RPC_URL: &str = "https://testnet.ckbapp.dev/rpc";

/// The chain to fetch transactions from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Network {
    /// The CKB mainnet, Lina.
    #[default]
    Mainnet,
    /// The CKB testnet, Pudge.
    Testnet,
    /// Any node reachable at the url.
    Custom(Url),
}

impl Network {
    /// The JSON-RPC endpoint of the network.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        match self {
            Network::Mainnet => Url::parse(MAINNET_RPC_URL),
            Network::Testnet => Url::parse(TESTNET_RPC_URL),
            Network::Custom(url) => Ok(url.clone()),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
            Network::Custom(url) => write!(f, "{}", url),
        }
    }
}

/// Parses `mainnet`, `testnet`, or a node url.
impl FromStr for Network {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Url::parse(s).map(Network::Custom),
        }
    }
}
