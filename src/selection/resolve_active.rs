use serde::Serialize;

use crate::{
    registry::is_reserved_rpc_url, BuiltinNetwork, CustomEndpoint, NetworkDescriptor, Provider,
    ProviderType,
};

/// The single entry the wallet is currently connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActiveSelection {
    Builtin { id: BuiltinNetwork },
    #[serde(rename_all = "camelCase")]
    Custom { rpc_url: String },
    /// An RPC target the custom list does not track (set by an import, for
    /// example). Shown as a one-off "current network" item that can't be deleted.
    #[serde(rename_all = "camelCase")]
    Unrecognized { rpc_target: String },
    /// Nothing matched; the "Custom RPC" catch-all slot.
    None,
}

impl ActiveSelection {
    pub fn builtin(&self) -> Option<BuiltinNetwork> {
        match self {
            ActiveSelection::Builtin { id } => Some(*id),
            _ => None,
        }
    }

    pub fn custom_rpc_url(&self) -> Option<&str> {
        match self {
            ActiveSelection::Custom { rpc_url } => Some(rpc_url),
            _ => None,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, ActiveSelection::Unrecognized { .. } | ActiveSelection::None)
    }
}

/// Pure and total: every well-formed provider maps to exactly one selection.
pub fn resolve_active(
    provider: &Provider,
    builtins: &[NetworkDescriptor],
    customs: &[CustomEndpoint],
) -> ActiveSelection {
    match &provider.provider_type {
        ProviderType::Builtin(id) if builtins.iter().any(|network| network.id == *id) => {
            ActiveSelection::Builtin { id: *id }
        }
        ProviderType::Rpc => {
            let Some(target) = provider.rpc_target.as_deref() else {
                return ActiveSelection::None;
            };

            if customs.iter().any(|entry| entry.rpc_url == target) {
                return ActiveSelection::Custom {
                    rpc_url: target.to_string(),
                };
            }

            if is_reserved_rpc_url(builtins, target) || target.is_empty() {
                ActiveSelection::None
            } else {
                ActiveSelection::Unrecognized {
                    rpc_target: target.to_string(),
                }
            }
        }
        _ => ActiveSelection::None,
    }
}
