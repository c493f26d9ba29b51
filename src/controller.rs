use crate::{
    commands::{Command, Commands, MetricsEvent, RpcTarget},
    config::NormalizedConfig,
    interaction::{ClickTarget, InteractiveRegion, ToggleClassAllowList},
    types::non_empty,
    BuiltinNetwork, CustomEndpoint, CustomEndpointStore, LogLevel, NetworkMenu, Provider, Result,
    SelectionError,
};

/// Turns user intent into command batches for the wallet store.
///
/// The controller holds configuration only. Every switch batch ends with
/// [`Command::HideDropdown`], so the view never sees a switched network behind a
/// still-open dropdown.
pub struct NetworkSelectionController<R = ToggleClassAllowList> {
    config: NormalizedConfig,
    region: R,
}

impl NetworkSelectionController {
    pub fn new(config: NormalizedConfig) -> Self {
        let region = ToggleClassAllowList::new(config.toggle_class_names.clone());
        Self { config, region }
    }
}

impl Default for NetworkSelectionController {
    fn default() -> Self {
        Self::new(NormalizedConfig::default())
    }
}

impl<R: InteractiveRegion> NetworkSelectionController<R> {
    pub fn with_region(config: NormalizedConfig, region: R) -> Self {
        Self { config, region }
    }

    pub fn config(&self) -> &NormalizedConfig {
        &self.config
    }

    pub fn menu(&self, provider: &Provider, store: &CustomEndpointStore) -> NetworkMenu {
        NetworkMenu::build(provider, store, &self.config.default_ticker)
    }

    pub fn switch_to_builtin(&self, provider: &Provider, network: BuiltinNetwork) -> Commands {
        let mut commands = Commands::new();

        if self.config.telemetry {
            commands.push(Command::RecordEvent(MetricsEvent::network_switch(
                &provider.provider_type.to_string(),
                network.as_ref(),
            )));
        }

        commands
            .push(Command::SetProviderType { network })
            .push(Command::HideDropdown);

        self.log(network.as_ref(), "switching to built-in network");
        commands
    }

    pub fn switch_to_custom(&self, entry: &CustomEndpoint) -> Commands {
        let target = RpcTarget {
            rpc_target: entry.rpc_url.clone(),
            chain_id: entry.chain_id.clone(),
            ticker: entry.ticker_or(&self.config.default_ticker).to_string(),
            nickname: entry.nickname.clone().unwrap_or_default(),
            rpc_prefs: entry.rpc_prefs.clone(),
        };

        self.log(&entry.rpc_url, "switching to custom RPC endpoint");
        vec![Command::SetRpcTarget(target), Command::HideDropdown].into()
    }

    /// Re-applies the provider's own RPC target, for the pinned "current" item.
    ///
    /// A tracked target is re-emitted from its stored entry so its metadata
    /// survives; an untracked one carries the wallet's `network` as chain id.
    /// Built-in providers have nothing to re-apply and only close the dropdown.
    pub fn reselect_current(
        &self,
        provider: &Provider,
        store: &CustomEndpointStore,
        network: &str,
    ) -> Commands {
        let Some(rpc_target) = non_empty(provider.active_rpc_target()) else {
            return vec![Command::HideDropdown].into();
        };

        if let Some(entry) = store.get(rpc_target) {
            return self.switch_to_custom(entry);
        }

        let target = RpcTarget {
            rpc_target: rpc_target.to_string(),
            chain_id: non_empty(Some(network)).map(str::to_string),
            ticker: non_empty(provider.ticker.as_deref())
                .unwrap_or(&self.config.default_ticker)
                .to_string(),
            nickname: provider.nickname.clone().unwrap_or_default(),
            rpc_prefs: Default::default(),
        };

        vec![Command::SetRpcTarget(target), Command::HideDropdown].into()
    }

    /// Tracks a new endpoint and switches to it. On rejection nothing is emitted
    /// and the dropdown stays open; see [`Self::rejection_commands`].
    pub fn add_custom_and_switch(
        &self,
        store: &mut CustomEndpointStore,
        rpc_url: &str,
        chain_id: Option<String>,
        ticker: Option<String>,
        nickname: Option<String>,
        explorer_url: Option<String>,
    ) -> Result<Commands> {
        let mut entry = CustomEndpoint::new(rpc_url);
        entry.chain_id = chain_id.filter(|id| !id.is_empty());
        entry.ticker = ticker.filter(|t| !t.is_empty());
        entry.nickname = nickname.filter(|n| !n.is_empty());
        entry.rpc_prefs.block_explorer_url = explorer_url.filter(|u| !u.is_empty());

        if let Err(err) = store.add(entry.clone()) {
            tracing::warn!(rpc_url = %rpc_url, error = %err, "custom RPC endpoint rejected");
            return Err(err);
        }

        Ok(self.switch_to_custom(&entry))
    }

    /// Validation feedback for a rejected add. Never closes the dropdown.
    pub fn rejection_commands(&self, err: &SelectionError) -> Commands {
        vec![Command::ShowValidationMessage {
            message: err.to_string(),
        }]
        .into()
    }

    /// Always emits the delete, whether or not the store had the entry.
    pub fn delete_custom(&self, store: &mut CustomEndpointStore, rpc_url: &str) -> Commands {
        if !store.remove(rpc_url) {
            tracing::debug!(rpc_url = %rpc_url, "deleting untracked RPC endpoint");
        }

        vec![Command::DeleteRpcTarget {
            rpc_url: rpc_url.to_string(),
        }]
        .into()
    }

    pub fn request_add_network_flow(&self) -> Commands {
        vec![
            Command::SetNetworksTabAddMode {
                is_in_add_mode: true,
            },
            Command::Navigate {
                route: self.config.networks_route.clone(),
            },
            Command::HideDropdown,
        ]
        .into()
    }

    pub fn on_outside_click(&self, target: &ClickTarget) -> Commands {
        if self.region.is_inside(target) {
            return Commands::new();
        }

        tracing::trace!(classes = ?target.class_list(), "click outside network dropdown");
        vec![Command::HideDropdown].into()
    }

    fn log(&self, network: &str, msg: &str) {
        match self.config.log_level {
            LogLevel::Info => tracing::info!(network = %network, "{msg}"),
            LogLevel::Error => tracing::error!(network = %network, "{msg}"),
            LogLevel::Debug => tracing::debug!(network = %network, "{msg}"),
            LogLevel::Trace => tracing::trace!(network = %network, "{msg}"),
            LogLevel::Warn => tracing::warn!(network = %network, "{msg}"),
        }
    }
}
