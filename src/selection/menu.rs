use serde::Serialize;

use crate::{
    types::non_empty, resolve_active, ActiveSelection, CustomEndpoint, CustomEndpointStore,
    NetworkDescriptor, Provider,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "item", rename_all = "camelCase")]
pub enum MenuItem {
    Builtin {
        network: &'static NetworkDescriptor,
        active: bool,
    },
    /// The provider's own RPC target, pinned below the built-ins.
    #[serde(rename_all = "camelCase")]
    Current {
        rpc_target: String,
        label: String,
        ticker: Option<String>,
        nickname: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Custom {
        endpoint: CustomEndpoint,
        label: String,
        ticker: String,
    },
    /// Trailing "Custom RPC" entry that opens the add-network flow.
    CustomRpc { active: bool },
}

impl MenuItem {
    pub fn is_active(&self) -> bool {
        match self {
            MenuItem::Builtin { active, .. } | MenuItem::CustomRpc { active } => *active,
            MenuItem::Current { .. } => true,
            MenuItem::Custom { .. } => false,
        }
    }

    /// Only tracked custom endpoints can be deleted from the menu.
    pub fn is_deletable(&self) -> bool {
        matches!(self, MenuItem::Custom { .. })
    }

    pub fn rpc_url(&self) -> Option<&str> {
        match self {
            MenuItem::Builtin { network, .. } => Some(network.rpc_url),
            MenuItem::Current { rpc_target, .. } => Some(rpc_target),
            MenuItem::Custom { endpoint, .. } => Some(&endpoint.rpc_url),
            MenuItem::CustomRpc { .. } => None,
        }
    }
}

/// Render-ready dropdown contents for one snapshot of wallet state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMenu {
    pub active: ActiveSelection,
    /// Header label; `None` means the view should show its "unknown network" text.
    pub title: Option<String>,
    pub items: Vec<MenuItem>,
}

impl NetworkMenu {
    pub fn build(provider: &Provider, store: &CustomEndpointStore, default_ticker: &str) -> Self {
        let registry = store.registry();
        let active = resolve_active(provider, registry.list_all(), store.entries());

        let mut items: Vec<MenuItem> = registry
            .list_all()
            .iter()
            .map(|network| MenuItem::Builtin {
                network,
                active: active.builtin() == Some(network.id),
            })
            .collect();

        let current = current_item(provider, store);
        // The catch-all is checked whenever nothing above it is.
        let catch_all_active = current.is_none() && active.builtin().is_none();
        items.extend(current);

        items.extend(store.list_for_display(&active).into_iter().map(|entry| {
            MenuItem::Custom {
                label: entry.label().to_string(),
                ticker: entry.ticker_or(default_ticker).to_string(),
                endpoint: entry.clone(),
            }
        }));

        items.push(MenuItem::CustomRpc {
            active: catch_all_active,
        });

        Self {
            title: title(provider, &active),
            active,
            items,
        }
    }

    pub fn current(&self) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| matches!(item, MenuItem::Current { .. }))
    }

    pub fn custom_entries(&self) -> impl Iterator<Item = &CustomEndpoint> {
        self.items.iter().filter_map(|item| match item {
            MenuItem::Custom { endpoint, .. } => Some(endpoint),
            _ => None,
        })
    }
}

fn current_item(provider: &Provider, store: &CustomEndpointStore) -> Option<MenuItem> {
    let target = non_empty(provider.active_rpc_target())?;
    if store.registry().is_reserved_url(target) {
        return None;
    }

    let tracked = store.get(target);
    let nickname = non_empty(provider.nickname.as_deref())
        .or_else(|| tracked.and_then(|entry| non_empty(entry.nickname.as_deref())))
        .map(str::to_string);

    Some(MenuItem::Current {
        rpc_target: target.to_string(),
        label: nickname.clone().unwrap_or_else(|| target.to_string()),
        ticker: provider.ticker.clone(),
        nickname,
    })
}

fn title(provider: &Provider, active: &ActiveSelection) -> Option<String> {
    match active.builtin() {
        Some(id) => Some(id.descriptor().name.to_string()),
        None => non_empty(provider.nickname.as_deref()).map(str::to_string),
    }
}
