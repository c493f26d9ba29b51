use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registry::BuiltinNetwork;

/// Ticker used when a custom endpoint does not carry one.
pub const DEFAULT_TICKER: &str = "ETH";

/// Provider type the wallet store uses for user supplied RPC targets.
pub const RPC_PROVIDER_TYPE: &str = "rpc";

/// The `type` field of the wallet provider.
///
/// Built-in ids and `"rpc"` are parsed into their own variants; anything else the
/// store holds is kept verbatim so it round-trips, and never matches an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderType {
    Builtin(BuiltinNetwork),
    Rpc,
    Other(String),
}

impl From<String> for ProviderType {
    fn from(value: String) -> Self {
        if value == RPC_PROVIDER_TYPE {
            return ProviderType::Rpc;
        }
        match value.parse::<BuiltinNetwork>() {
            Ok(network) => ProviderType::Builtin(network),
            Err(_) => ProviderType::Other(value),
        }
    }
}

impl From<&str> for ProviderType {
    fn from(value: &str) -> Self {
        ProviderType::from(value.to_string())
    }
}

impl From<ProviderType> for String {
    fn from(value: ProviderType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderType::Builtin(network) => write!(f, "{network}"),
            ProviderType::Rpc => f.write_str(RPC_PROVIDER_TYPE),
            ProviderType::Other(raw) => f.write_str(raw),
        }
    }
}

/// Current connection descriptor, owned by the wallet store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    /// Only meaningful when `provider_type` is [`ProviderType::Rpc`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl Provider {
    pub fn builtin(network: BuiltinNetwork) -> Self {
        Self {
            provider_type: ProviderType::Builtin(network),
            rpc_target: None,
            ticker: Some(network.descriptor().ticker.to_string()),
            nickname: None,
        }
    }

    pub fn rpc(rpc_target: impl Into<String>) -> Self {
        Self {
            provider_type: ProviderType::Rpc,
            rpc_target: Some(rpc_target.into()),
            ticker: None,
            nickname: None,
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// The RPC target, but only when the provider points at a custom endpoint.
    pub fn active_rpc_target(&self) -> Option<&str> {
        match self.provider_type {
            ProviderType::Rpc => self.rpc_target.as_deref(),
            _ => None,
        }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::builtin(BuiltinNetwork::Mainnet)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer_url: Option<String>,
}

/// A user added RPC endpoint. `rpc_url` is the identity; the rest is metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEndpoint {
    pub rpc_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default)]
    pub rpc_prefs: RpcPrefs,
}

impl CustomEndpoint {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            chain_id: None,
            ticker: None,
            nickname: None,
            rpc_prefs: RpcPrefs::default(),
        }
    }

    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_block_explorer_url(mut self, explorer_url: impl Into<String>) -> Self {
        self.rpc_prefs.block_explorer_url = Some(explorer_url.into());
        self
    }

    /// Ticker to present, falling back to `default` when missing or blank.
    pub fn ticker_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(self.ticker.as_deref()).unwrap_or(default)
    }

    /// Label shown in the menu: the nickname when set, the URL otherwise.
    pub fn label(&self) -> &str {
        non_empty(self.nickname.as_deref()).unwrap_or(&self.rpc_url)
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}
