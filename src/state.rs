//! In-memory wallet store that applies controller commands.
//!
//! Real wallets persist this state elsewhere; this implementation closes the loop
//! for callers that keep state in process, and for tests.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{
    commands::{Command, Commands, MetricsEvent, RpcTarget},
    types::non_empty,
    CustomEndpoint, CustomEndpointStore, NetworkRegistry, Provider, ProviderType,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub provider: Provider,
    #[serde(default, with = "null_as_empty")]
    pub frequent_rpc_list_detail: Vec<CustomEndpoint>,
    #[serde(default)]
    pub network_dropdown_open: bool,
    /// Secondary network identifier, passed through untouched.
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub networks_tab_add_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<MetricsEvent>,
    #[serde(skip)]
    registry: NetworkRegistry,
}

impl WalletState {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }

    pub fn with_registry(mut self, registry: NetworkRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    pub fn endpoint_store(&self) -> CustomEndpointStore {
        CustomEndpointStore::from_entries(
            self.registry,
            self.frequent_rpc_list_detail.iter().cloned(),
        )
    }

    pub fn open_dropdown(&mut self) {
        self.network_dropdown_open = true;
        self.validation_message = None;
    }

    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::SetProviderType { network } => {
                self.provider = Provider::builtin(*network);
                self.network = network.descriptor().chain_id.to_string();
            }
            Command::SetRpcTarget(target) => self.set_rpc_target(target),
            Command::DeleteRpcTarget { rpc_url } => {
                self.frequent_rpc_list_detail
                    .retain(|entry| &entry.rpc_url != rpc_url);
            }
            Command::HideDropdown => {
                self.network_dropdown_open = false;
                self.validation_message = None;
            }
            Command::SetNetworksTabAddMode { is_in_add_mode } => {
                self.networks_tab_add_mode = *is_in_add_mode;
            }
            Command::Navigate { route } => self.route = Some(route.clone()),
            Command::RecordEvent(event) => self.events.push(event.clone()),
            Command::ShowValidationMessage { message } => {
                self.validation_message = Some(message.clone());
            }
        }
    }

    pub fn apply_all(&mut self, commands: &Commands) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Switching to a tracked target moves its entry, unchanged, to the newest
    /// slot of the custom list; an untracked one is appended. Reserved URLs leave
    /// the list alone.
    fn set_rpc_target(&mut self, target: &RpcTarget) {
        self.provider = Provider {
            provider_type: ProviderType::Rpc,
            rpc_target: Some(target.rpc_target.clone()),
            ticker: Some(target.ticker.clone()),
            nickname: non_empty(Some(target.nickname.as_str())).map(str::to_string),
        };
        if let Some(chain_id) = &target.chain_id {
            self.network = chain_id.clone();
        }

        if self.registry.is_reserved_url(&target.rpc_target) {
            return;
        }

        let tracked = self
            .frequent_rpc_list_detail
            .iter()
            .position(|entry| entry.rpc_url == target.rpc_target);
        let entry = match tracked {
            Some(index) => self.frequent_rpc_list_detail.remove(index),
            None => CustomEndpoint {
                rpc_url: target.rpc_target.clone(),
                chain_id: target.chain_id.clone(),
                ticker: Some(target.ticker.clone()),
                nickname: non_empty(Some(target.nickname.as_str())).map(str::to_string),
                rpc_prefs: target.rpc_prefs.clone(),
            },
        };
        self.frequent_rpc_list_detail.push(entry);
    }
}

/// Shared handle to a [`WalletState`].
///
/// A batch is applied under one write lock, so snapshots never show half of it.
#[derive(Debug, Clone, Default)]
pub struct SharedWalletStore {
    inner: Arc<RwLock<WalletState>>,
}

impl SharedWalletStore {
    pub fn new(state: WalletState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    pub fn snapshot(&self) -> WalletState {
        self.inner.read().clone()
    }

    pub fn dispatch(&self, commands: &Commands) {
        if commands.is_empty() {
            return;
        }
        let mut state = self.inner.write();
        state.apply_all(commands);
        tracing::debug!(commands = commands.len(), "applied command batch");
    }

    pub fn update<T>(&self, f: impl FnOnce(&mut WalletState) -> T) -> T {
        f(&mut self.inner.write())
    }
}

/// `frequentRpcListDetail` may be `null` in stored state.
mod null_as_empty {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T: Serialize, S: Serializer>(
        value: &Vec<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
