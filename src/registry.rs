//! Built-in networks shipped with the wallet.
//!
//! The catalog is fixed for the lifetime of the process. Every RPC URL it lists,
//! plus the local development node, is *reserved*: it can never be tracked as a
//! custom endpoint.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Canonical local development node.
pub const LOCALHOST_RPC_URL: &str = "http://localhost:8545";

/// Symbolic ids of the built-in networks. The string form is what the wallet
/// store keeps in `provider.type`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BuiltinNetwork {
    Mainnet,
    Testnet,
}

impl BuiltinNetwork {
    pub fn descriptor(&self) -> &'static NetworkDescriptor {
        match self {
            BuiltinNetwork::Mainnet => &NETWORKS[0],
            BuiltinNetwork::Testnet => &NETWORKS[1],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub id: BuiltinNetwork,
    pub name: &'static str,
    pub rpc_url: &'static str,
    pub chain_id: u64,
    pub ticker: &'static str,
    pub display_color: &'static str,
    pub explorer_url: &'static str,
}

impl NetworkDescriptor {
    /// Hex chain id, as wallets exchange it over EIP-3085/3326.
    pub fn chain_id_hex(&self) -> String {
        format!("0x{:x}", self.chain_id)
    }
}

pub const NETWORKS: &[NetworkDescriptor] = &[
    NetworkDescriptor {
        id: BuiltinNetwork::Mainnet,
        name: "NewChainMainNet",
        rpc_url: "https://global.rpc.mainnet.newtonproject.org",
        chain_id: 1012,
        ticker: "NEW",
        display_color: "#29B6AF",
        explorer_url: "https://explorer.newtonproject.org",
    },
    NetworkDescriptor {
        id: BuiltinNetwork::Testnet,
        name: "NewChainTestNet",
        rpc_url: "https://rpc1.newchain.newtonproject.org",
        chain_id: 1007,
        ticker: "NEW",
        display_color: "#F6C343",
        explorer_url: "https://explorer.testnet.newtonproject.org",
    },
];

/// True when `url` is one of `networks`' RPC URLs or the local development node.
/// Exact string match, no URL normalization.
pub fn is_reserved_rpc_url(networks: &[NetworkDescriptor], url: &str) -> bool {
    url == LOCALHOST_RPC_URL || networks.iter().any(|network| network.rpc_url == url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkRegistry {
    networks: &'static [NetworkDescriptor],
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self { networks: NETWORKS }
    }
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in networks, in menu order.
    pub fn list_all(&self) -> &'static [NetworkDescriptor] {
        self.networks
    }

    pub fn get(&self, id: BuiltinNetwork) -> Option<&'static NetworkDescriptor> {
        self.networks.iter().find(|network| network.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = BuiltinNetwork> {
        BuiltinNetwork::iter()
    }

    /// Exact string match, no URL normalization.
    pub fn find_by_rpc_url(&self, url: &str) -> Option<&'static NetworkDescriptor> {
        self.networks.iter().find(|network| network.rpc_url == url)
    }

    pub fn is_reserved_url(&self, url: &str) -> bool {
        is_reserved_rpc_url(self.networks, url)
    }
}
